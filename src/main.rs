//! Calendar image CLI application.
//!
//! # Usage
//! ```ignore
//! calimg                               // calendar.png, Monday start
//! calimg out.png 3                     // Thursday start
//! calimg out.png codexday My Month     // named start day, custom title
//! ```

use calimg::args::{self, Args};
use calimg::layout::Layout;
use calimg::output::write_image;
use calimg::renderer::{Fonts, render_month};
use calimg::types::{CalContext, CalError};

fn main() {
    // `/?` and case-insensitive help forms can't be expressed through clap,
    // so the first raw argument is checked before parsing.
    if let Some(first) = std::env::args().nth(1)
        && args::is_help_arg(&first)
    {
        println!("{}", args::USAGE);
        return;
    }

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("calimg: {e}");
        if matches!(e, CalError::InvalidArgument(_)) {
            eprintln!("{}", args::USAGE);
        }
        std::process::exit(e.exit_code());
    }
}

fn run(args: &Args) -> calimg::types::Result<()> {
    let ctx = CalContext::new(args)?;
    let layout = Layout::new(ctx.start_day);
    let fonts = Fonts::load();

    let img = render_month(&ctx, &layout, &fonts);
    let written = write_image(&img, &ctx.output)?;

    println!("Wrote: {}", written.display());
    Ok(())
}
