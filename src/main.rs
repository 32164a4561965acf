use vista::ui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut app = vista::default()?;
    app.set_model_path("assets/models/starter-scene.obj");
    app.set_ui(ui::scene_panel);
    app.run()
}
