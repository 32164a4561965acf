use wgpu::Device;

use crate::{
    assets::loader::LoadedModel,
    gfx::{
        camera::look_at_camera::LookAtCamera,
        resources::material::{Material, MaterialManager},
        scene::{
            lighting::{AmbientLight, DirectionalLight},
            settings::SceneSettings,
        },
    },
};

use super::object::Object;

use cgmath::{Deg, Vector3, Zero};

/// Main scene containing the camera, lights, background and loaded objects
pub struct Scene {
    pub camera: LookAtCamera,
    pub ambient: AmbientLight,
    pub sun: DirectionalLight,
    /// Clear color, linear RGB
    pub background: [f32; 3],
    pub objects: Vec<Object>,
    pub material_manager: MaterialManager,
}

impl Scene {
    /// Creates the default scene: sky background, two lights, camera at the
    /// start of the scroll path looking at the origin
    pub fn new(aspect: f32) -> Self {
        let camera = LookAtCamera::new(
            Vector3::new(34.0, 16.0, -20.0),
            Vector3::zero(),
            Deg(75.0),
            aspect,
        );

        Self {
            camera,
            ambient: AmbientLight::default(),
            sun: DirectionalLight::default(),
            // #c8f0f9
            background: [0.784, 0.941, 0.976],
            objects: Vec::new(),
            material_manager: MaterialManager::new(),
        }
    }

    /// Updates per-frame scene state (camera matrices)
    pub fn update(&mut self) {
        self.camera.update_view_proj();
    }

    /// Attaches an asynchronously loaded model to the scene
    ///
    /// Registers the model's materials, uploads GPU resources, and appends
    /// the object to the draw list. Called at most once per load task, on
    /// the UI thread, when the loader reports success.
    pub fn attach_model(&mut self, model: LoadedModel, device: &Device, queue: &wgpu::Queue) {
        for material in model.materials {
            // First definition of a name wins, matching OBJ material ids
            if self.material_manager.get_material(&material.name).is_none() {
                self.material_manager.add_material(material);
            }
        }

        let mut object = model.object;
        object.init_gpu_resources(device);
        object.update_transform(queue);
        self.objects.push(object);

        self.material_manager.update_all_gpu_resources(device, queue);
    }

    /// Initializes GPU resources for materials (and any pre-attached objects)
    ///
    /// Must be called after the GPU context is available and before rendering.
    pub fn init_gpu_resources(&mut self, device: &Device, queue: &wgpu::Queue) {
        for object in self.objects.iter_mut() {
            object.init_gpu_resources(device);
        }

        self.material_manager.update_all_gpu_resources(device, queue);
    }

    /// Copies the debug-panel overrides into the live scene
    ///
    /// The single ordered write point for panel edits; runs once per frame
    /// before the global uniforms are rebuilt.
    pub fn apply_settings(&mut self, settings: &SceneSettings) {
        self.sun.color = settings.sun_color;
        self.sun.intensity = settings.sun_intensity;
        self.sun.position = settings.sun_position.into();
        self.ambient.color = settings.ambient_color;
        self.ambient.intensity = settings.ambient_intensity;
        self.background = settings.background;
        self.camera.position = settings.camera_position.into();
    }

    /// Gets material for rendering an object, falling back to the default
    pub fn get_material_for_object(&self, object: &Object) -> &Material {
        self.material_manager
            .get_material_for_object(object.get_material_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::vec3;

    #[test]
    fn test_default_scene_matches_start_state() {
        let scene = Scene::new(1920.0 / 1080.0);
        assert_eq!(scene.camera.position, vec3(34.0, 16.0, -20.0));
        assert_eq!(scene.camera.target, Vector3::zero());
        assert!(scene.objects.is_empty());
        assert_eq!(scene.background, [0.784, 0.941, 0.976]);
    }

    #[test]
    fn test_scene_renders_without_model() {
        // A scene with no objects is still a valid draw list; model load
        // failure must not leave anything half-attached.
        let mut scene = Scene::new(1.0);
        scene.update();
        assert!(scene.objects.is_empty());
        assert!(scene
            .material_manager
            .get_material(&"default".to_string())
            .is_some());
    }

    #[test]
    fn test_apply_settings_moves_the_camera() {
        let mut scene = Scene::new(1.0);
        let mut settings = SceneSettings::from_scene(&scene);
        settings.camera_position = [-30.0, 20.0, -40.0];
        scene.apply_settings(&settings);
        scene.update();
        assert_eq!(
            scene.camera.uniform.view_position,
            [-30.0, 20.0, -40.0, 1.0]
        );
    }
}
