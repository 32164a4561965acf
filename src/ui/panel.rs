// src/ui/panel.rs
//! Scene debug panel
//!
//! Sliders and color pickers for the lights, camera position, and
//! background. Controls edit the [`SceneSettings`] store; the app copies
//! the store into the live scene once per frame.

use crate::gfx::scene::settings::SceneSettings;

/// Default scene panel: directional light, ambient light, camera, background
pub fn scene_panel(ui: &imgui::Ui, settings: &mut SceneSettings) {
    let display_size = ui.io().display_size;
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return;
    }

    ui.window("Scene")
        .size([360.0, 520.0], imgui::Condition::FirstUseEver)
        .position([20.0, 20.0], imgui::Condition::FirstUseEver)
        .resizable(true)
        .collapsible(true)
        .build(|| {
            render_sun_controls(ui, settings);
            ui.separator();
            render_ambient_controls(ui, settings);
            ui.separator();
            render_camera_controls(ui, settings);
            ui.separator();
            render_background_controls(ui, settings);
        });
}

fn render_sun_controls(ui: &imgui::Ui, settings: &mut SceneSettings) {
    if ui.collapsing_header("Directional light", imgui::TreeNodeFlags::DEFAULT_OPEN) {
        ui.slider("Dir intensity", 0.0, 10.0, &mut settings.sun_intensity);
        ui.slider("Dir X pos", -100.0, 100.0, &mut settings.sun_position[0]);
        ui.slider("Dir Y pos", 0.0, 100.0, &mut settings.sun_position[1]);
        ui.slider("Dir Z pos", -100.0, 100.0, &mut settings.sun_position[2]);
        ui.color_edit3("Dir color", &mut settings.sun_color);
    }
}

fn render_ambient_controls(ui: &imgui::Ui, settings: &mut SceneSettings) {
    if ui.collapsing_header("Ambient light", imgui::TreeNodeFlags::DEFAULT_OPEN) {
        ui.slider("Amb intensity", 0.0, 10.0, &mut settings.ambient_intensity);
        ui.color_edit3("Amb color", &mut settings.ambient_color);
    }
}

fn render_camera_controls(ui: &imgui::Ui, settings: &mut SceneSettings) {
    if ui.collapsing_header("Camera", imgui::TreeNodeFlags::DEFAULT_OPEN) {
        ui.slider("Camera x", -100.0, 100.0, &mut settings.camera_position[0]);
        ui.slider("Camera y", -100.0, 100.0, &mut settings.camera_position[1]);
        ui.slider("Camera z", -100.0, 100.0, &mut settings.camera_position[2]);
        ui.checkbox("Log camera position", &mut settings.trace_camera);
        ui.text("Scroll to animate; sliders apply while idle");
    }
}

fn render_background_controls(ui: &imgui::Ui, settings: &mut SceneSettings) {
    if ui.collapsing_header("Background", imgui::TreeNodeFlags::DEFAULT_OPEN) {
        ui.color_edit3("BG color", &mut settings.background);
    }
}
