//! Capacity overview card: occupied/total spaces with a fill bar

use eframe::egui;

/// Render one capacity card with current count, total and fill percentage
pub fn render_capacity_card(
    ui: &mut egui::Ui,
    title: &str,
    current: u32,
    total: u32,
    accent: egui::Color32,
) {
    let percentage = if total > 0 {
        (current as f32 / total as f32) * 100.0
    } else {
        0.0
    };

    egui::Frame::none()
        .fill(accent)
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(220.0);
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(title)
                            .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                            .color(egui::Color32::WHITE),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("{}%", percentage.round() as u32))
                                .color(egui::Color32::WHITE)
                                .strong(),
                        );
                    });
                });

                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(current.to_string())
                            .font(egui::FontId::new(32.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                    ui.label(
                        egui::RichText::new(format!("/ {}", total))
                            .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                            .color(egui::Color32::from_rgba_unmultiplied(255, 255, 255, 210)),
                    );
                });

                // Fill bar, clamped so overbooking doesn't overflow the track
                let desired = egui::vec2(ui.available_width(), 8.0);
                let (rect, _) = ui.allocate_exact_size(desired, egui::Sense::hover());
                ui.painter().rect_filled(
                    rect,
                    egui::Rounding::same(4.0),
                    egui::Color32::from_rgba_unmultiplied(255, 255, 255, 90),
                );
                let fill_width = rect.width() * (percentage.min(100.0) / 100.0);
                if fill_width > 0.0 {
                    let fill_rect =
                        egui::Rect::from_min_size(rect.min, egui::vec2(fill_width, rect.height()));
                    ui.painter().rect_filled(
                        fill_rect,
                        egui::Rounding::same(4.0),
                        egui::Color32::WHITE,
                    );
                }
            });
        });
}
