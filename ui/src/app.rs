use egui::{Color32, Rect, Stroke, StrokeKind, TextureHandle, TextureOptions, pos2, vec2};
use qrview_business::ViewerEvent;

use crate::state::State;
use crate::utils::save_dialog::save_shortcut_pressed;
use crate::utils::texture::color_image_from_pixels;
use crate::widgets;

/// Background of the QR display area.
const CONTENT_FILL: Color32 = Color32::from_rgb(0x18, 0x18, 0x18);

pub struct QrViewApp {
    pub state: State,
    /// Last uploaded QR texture; rebuilt whenever the viewer's revision moves.
    texture: Option<TextureHandle>,
    uploaded_revision: Option<u64>,
    last_size: Option<egui::Vec2>,
}

impl QrViewApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            texture: None,
            uploaded_revision: None,
            last_size: None,
        }
    }

    /// Translate this frame's input into viewer events.
    fn dispatch_input(&mut self, ctx: &egui::Context) {
        // Deferred save-dialog results first, then this frame's input.
        while let Ok(path) = self.state.save_path_receiver.try_recv() {
            self.state.viewer.handle_event(ViewerEvent::FileChosen(path));
        }

        let size = ctx.screen_rect().size();
        if self.last_size != Some(size) {
            self.last_size = Some(size);
            self.state.viewer.handle_event(ViewerEvent::Resized {
                width: size.x,
                height: size.y,
            });
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.state.viewer.handle_event(ViewerEvent::TogglePanel);
        }
        // Quit on Q, but not while a text field is capturing keystrokes.
        if !ctx.wants_keyboard_input() && ctx.input(|i| i.key_pressed(egui::Key::Q)) {
            self.state.viewer.handle_event(ViewerEvent::Quit);
        }
        if save_shortcut_pressed(ctx) {
            self.state
                .save_dialog
                .request_save(ctx, self.state.save_path_sender.clone());
        }
    }

    /// Upload the pixel buffer as a texture if it changed since last frame.
    fn sync_texture(&mut self, ctx: &egui::Context) {
        let revision = self.state.viewer.revision();
        if self.uploaded_revision == Some(revision) {
            return;
        }
        let image = color_image_from_pixels(self.state.viewer.pixels());
        // Nearest-neighbor magnification keeps module edges crisp.
        self.texture = Some(ctx.load_texture("qr", image, TextureOptions::NEAREST));
        self.uploaded_revision = Some(revision);
    }

    /// The border color around the QR square: the current foreground color.
    fn foreground_color32(&self) -> Color32 {
        let [r, g, b, a] = self
            .state
            .viewer
            .colors
            .foreground
            .map(|c| (c * 255.0) as u8);
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}

impl eframe::App for QrViewApp {
    /// Called each time the UI needs repainting, which may be many times per
    /// second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.dispatch_input(ctx);

        let layout = *self.state.viewer.layout();

        if self.state.viewer.panel_open() {
            egui::SidePanel::left("parameter_panel")
                .exact_width(layout.panel.w)
                .resizable(false)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        if widgets::parameter_panel(&mut self.state.viewer, ui) {
                            self.state.viewer.recompute();
                        }
                    });
                });
        }

        self.sync_texture(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(CONTENT_FILL))
            .show(ctx, |ui| {
                let qr_rect = Rect::from_min_size(
                    pos2(layout.qr.x, layout.qr.y),
                    vec2(layout.qr.w, layout.qr.h),
                );
                if let Some(texture) = &self.texture {
                    ui.painter().image(
                        texture.id(),
                        qr_rect,
                        Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                        Color32::WHITE,
                    );
                }
                ui.painter().rect_stroke(
                    qr_rect,
                    0,
                    Stroke::new(1.0, self.foreground_color32()),
                    StrokeKind::Inside,
                );
            });

        if self.state.viewer.should_quit() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
