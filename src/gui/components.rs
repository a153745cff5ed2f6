use super::models::{ImageWindow, fit_size};
use eframe::egui::{self, Color32, RichText, Ui};

const CAPTION_SIZE: f32 = 18.0;
const MARGIN: f32 = 16.0;

pub struct CaptionComponent;

impl CaptionComponent {
    pub fn render(ui: &mut Ui, window: &ImageWindow) {
        ui.add_space(MARGIN / 2.0);
        ui.label(
            RichText::new(&window.title)
                .size(CAPTION_SIZE)
                .color(Color32::from_gray(20)),
        );
        ui.add_space(MARGIN / 2.0);
    }
}

/// Bare image, no axes or grid, scaled to the space left under the caption.
pub struct ImageComponent;

impl ImageComponent {
    pub fn render(ui: &mut Ui, window: &ImageWindow) {
        let Some(texture) = &window.texture else {
            ui.spinner();
            return;
        };

        let available = ui.available_size() - egui::vec2(MARGIN, MARGIN);
        let size = fit_size((window.buffer.width, window.buffer.height), available);
        ui.add(egui::Image::new((texture.id(), size)).fit_to_exact_size(size));
    }
}
