use super::components::*;
use super::models::ImageWindow;
use eframe::egui;

impl eframe::App for ImageWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Upload pixels on first frame. Nearest filtering keeps small images
        // blocky instead of blurred when scaled up.
        if self.texture.is_none() {
            let color_image = self.color_image();
            self.texture = Some(ctx.load_texture(
                "imgprep-image",
                color_image,
                egui::TextureOptions::NEAREST,
            ));
        }

        ctx.set_visuals(egui::Visuals::light());

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    CaptionComponent::render(ui, self);
                    ImageComponent::render(ui, self);
                });
            });
    }
}
