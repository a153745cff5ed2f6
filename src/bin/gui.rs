#[cfg(feature = "gui")]
use clap::Parser;
#[cfg(feature = "gui")]
use imgprep::{Image, Viewer, api, decode_image, gui::WindowViewer};

#[cfg(feature = "gui")]
#[derive(Parser)]
#[command(name = "imgprepUI", version, about = "Show an image from a URL or a local file")]
struct ViewerArgs {
    /// http(s) URL or path to an image file
    source: String,
}

#[cfg(feature = "gui")]
fn load(source: &str) -> Option<Image> {
    if source.starts_with("http://") || source.starts_with("https://") {
        return api::load_image_from_url(source);
    }
    match std::fs::read(source)
        .map_err(imgprep::Error::from)
        .and_then(|bytes| decode_image(&bytes))
    {
        Ok(image) => Some(image),
        Err(e) => {
            api::report_load_error(&e);
            None
        }
    }
}

#[cfg(feature = "gui")]
fn main() {
    let args = ViewerArgs::parse();

    let Some(image) = load(&args.source) else {
        println!("Could not load image. Please check the source and try again.");
        std::process::exit(1);
    };

    let title = format!(
        "{} ({}x{} {})",
        args.source,
        image.width(),
        image.height(),
        image.mode()
    );
    if let Err(e) = WindowViewer::default().show(&image, &title) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    eprintln!("GUI feature is not enabled. Please build with --features gui");
    std::process::exit(1);
}
