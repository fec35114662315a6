//! csx CLI
//!
//! Renders the built-in sample trees as C# source.

mod demos;

use std::sync::Once;

use csx_fmt::{render_lambda_with_config, IndentStyle, LineEnding, RenderConfig};

use demos::{Demo, DEMOS};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Enable with `RUST_LOG=csx_fmt=debug`. Set `CSX_LOG_TREE` to get indented
/// hierarchical output instead of flat lines.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var("CSX_LOG_TREE").is_ok() {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let mut config = RenderConfig::default();
    let mut target = None;
    for arg in args.iter().skip(1) {
        if let Some(width) = arg.strip_prefix("--indent=") {
            let Ok(width) = width.parse::<usize>() else {
                eprintln!("error: invalid indent width '{width}'");
                std::process::exit(1);
            };
            config.indent = IndentStyle::Spaces(width);
        } else if arg == "--tabs" {
            config.indent = IndentStyle::Tabs;
        } else if arg == "--crlf" {
            config = config.line_ending(LineEnding::CrLf);
        } else if arg.starts_with('-') {
            eprintln!("error: unknown option '{arg}'");
            std::process::exit(1);
        } else if target.is_none() {
            target = Some(arg.as_str());
        }
    }

    match target {
        None => print_usage(),
        Some("list") => {
            for demo in DEMOS {
                println!("{:<12}{}", demo.name, demo.summary);
            }
        }
        Some("all") => {
            for (i, demo) in DEMOS.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("// {}", demo.name);
                render_demo(demo, config);
            }
        }
        Some(name) => {
            let Some(demo) = demos::find(name) else {
                eprintln!("error: unknown sample '{name}'");
                eprintln!("Run 'csxc list' to see the available samples.");
                std::process::exit(1);
            };
            render_demo(demo, config);
        }
    }
}

fn render_demo(demo: &Demo, config: RenderConfig) {
    let (arena, lambda) = demo.build();
    tracing::debug!(sample = demo.name, nodes = arena.expr_count(), "rendering sample");
    match render_lambda_with_config(&arena, lambda, config) {
        Ok(text) => print!("{text}"),
        Err(e) => {
            eprintln!("error: {}: {e}", demo.name);
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("csx - C# source renderer for expression trees");
    println!();
    println!("Usage: csxc <sample|list|all> [options]");
    println!();
    println!("Commands:");
    println!("  list           List the built-in samples");
    println!("  all            Render every sample");
    println!("  <sample>       Render one sample");
    println!();
    println!("Options:");
    println!("  --indent=<n>   Indent with n spaces (default: 4)");
    println!("  --tabs         Indent with tabs");
    println!("  --crlf         End lines with CRLF");
}
