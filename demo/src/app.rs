//! # Demo App
//!
//! A small eframe application exercising the sunrise/sunset widget: two
//! editable `"H:M"` text fields, an update button that pushes the times into
//! the widget and restarts the animation, and a custom label formatter
//! rendering the on-track labels as `"06h 17m"`.

use eframe::egui;
use log::warn;
use sunrise_sunset_widget::{
    SunriseSunsetLabelFormatter, SunriseSunsetView, Time,
};

/// Formats labels as `"06h 17m"` instead of the widget's default `"6:17"`.
struct HourMinuteLabelFormatter;

impl HourMinuteLabelFormatter {
    fn format_label(time: Time) -> String {
        format!("{:02}h {:02}m", time.hour, time.minute)
    }
}

impl SunriseSunsetLabelFormatter for HourMinuteLabelFormatter {
    fn format_sunrise_label(&self, sunrise: Time) -> String {
        Self::format_label(sunrise)
    }

    fn format_sunset_label(&self, sunset: Time) -> String {
        Self::format_label(sunset)
    }
}

pub struct SunriseSunsetDemoApp {
    view: SunriseSunsetView,
    sunrise_input: String,
    sunset_input: String,
    error_message: Option<String>,
}

impl SunriseSunsetDemoApp {
    pub fn new() -> anyhow::Result<Self> {
        let mut view = SunriseSunsetView::new();
        view.set_label_formatter(Box::new(HourMinuteLabelFormatter));
        view.set_sunrise_time(Time::new(6, 17));
        view.set_sunset_time(Time::new(18, 32));
        view.start_animate()?;

        Ok(Self {
            view,
            sunrise_input: "06:17".to_string(),
            sunset_input: "18:32".to_string(),
            error_message: None,
        })
    }

    /// Parse an `"H:M"` field the way the original sample did: split on the
    /// colon, both parts numeric.
    fn parse_time(input: &str) -> Option<Time> {
        let (hour, minute) = input.trim().split_once(':')?;
        let hour: u32 = hour.trim().parse().ok()?;
        let minute: u32 = minute.trim().parse().ok()?;
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Time::new(hour, minute))
    }

    fn apply_times(&mut self) {
        let Some(sunrise) = Self::parse_time(&self.sunrise_input) else {
            warn!("unparseable sunrise input: {:?}", self.sunrise_input);
            self.error_message = Some(format!("Invalid sunrise time: {}", self.sunrise_input));
            return;
        };
        let Some(sunset) = Self::parse_time(&self.sunset_input) else {
            warn!("unparseable sunset input: {:?}", self.sunset_input);
            self.error_message = Some(format!("Invalid sunset time: {}", self.sunset_input));
            return;
        };

        self.view.set_sunrise_time(sunrise);
        self.view.set_sunset_time(sunset);
        match self.view.start_animate() {
            Ok(()) => self.error_message = None,
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }
}

impl eframe::App for SunriseSunsetDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Deep indigo background so the white track and labels stand out.
        let background = egui::Frame::default()
            .fill(egui::Color32::from_rgb(48, 63, 159))
            .inner_margin(egui::Margin::same(16.0));

        egui::CentralPanel::default().frame(background).show(ctx, |ui| {
            ui.label(
                egui::RichText::new("Sunrise & Sunset")
                    .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                    .color(egui::Color32::WHITE)
                    .strong(),
            );
            ui.add_space(12.0);

            self.view.show(ui);

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Sunrise").color(egui::Color32::WHITE));
                ui.add(egui::TextEdit::singleline(&mut self.sunrise_input).desired_width(60.0));
                ui.label(egui::RichText::new("Sunset").color(egui::Color32::WHITE));
                ui.add(egui::TextEdit::singleline(&mut self.sunset_input).desired_width(60.0));
                if ui.button("Update").clicked() {
                    self.apply_times();
                }
            });

            if let Some(ref error) = self.error_message {
                ui.add_space(8.0);
                ui.colored_label(egui::Color32::from_rgb(255, 138, 128), format!("❌ {}", error));
            }
        });
    }
}
