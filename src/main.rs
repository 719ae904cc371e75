use mazecarver::{DEFAULT_FLOOR_CODE, DEFAULT_WALL_CODE, MazeCarver, printer};

/// Log to a file so the terminal stays free for maze output.
/// The returned guard must stay alive for buffered log lines to be flushed.
fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", "mazecarver.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    guard
}

fn main() -> std::io::Result<()> {
    let _log_guard = init_logging();

    let mut input = String::new();
    println!("Enter maze dimensions (height width). Each must be at least 3, summing to at most 150:");
    std::io::stdin().read_line(&mut input)?;

    // Parse the input dimensions
    let dims = input
        .split_whitespace()
        .take(2)
        .filter_map(|s| s.parse::<i32>().ok())
        .collect::<Vec<_>>();

    if dims.len() != 2 {
        eprintln!("Please enter two valid numbers for height and width.");
        return Ok(());
    }

    let (height, width) = (dims[0], dims[1]);
    tracing::info!(height, width, "generating maze");

    let mut carver = MazeCarver::new();
    carver.generate(height, width);
    if carver.is_empty() {
        eprintln!("Dimensions out of range; no maze to display.");
        return Ok(());
    }

    let mut stdout = std::io::stdout();

    println!("Nested export:");
    printer::print_nested(
        &mut stdout,
        &carver.export_nested(DEFAULT_FLOOR_CODE, DEFAULT_WALL_CODE),
        printer::DEFAULT_WALL_COLOR,
        printer::DEFAULT_FLOOR_COLOR,
    )?;

    println!("\nFlat export:");
    printer::print_flat(
        &mut stdout,
        &carver.export_flat(DEFAULT_FLOOR_CODE, DEFAULT_WALL_CODE),
        printer::DEFAULT_WALL_COLOR,
        printer::DEFAULT_FLOOR_COLOR,
    )?;

    let floors = carver.floor_coordinates();
    println!("\n{} floor cells:", floors.len());
    for (row, col) in floors {
        print!("({row}, {col}) ");
    }
    println!();

    Ok(())
}
