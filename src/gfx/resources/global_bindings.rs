//! Global uniform bindings for camera and lighting data
//!
//! Manages the GPU uniform buffer and bind group for per-frame global state
//! shared by every object: camera matrices, the ambient fill light, and the
//! directional sun light.

use crate::{
    gfx::{
        camera::camera_utils::CameraUniform,
        scene::lighting::{AmbientLight, DirectionalLight},
    },
    wgpu_utils::uniform_buffer::UniformBuffer,
};

/// Global uniform buffer content structure
///
/// MUST match the Globals struct in scene.wgsl exactly, including padding.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalUBOContent {
    view_position: [f32; 4],
    view_proj: [[f32; 4]; 4],

    ambient_color: [f32; 3],
    ambient_intensity: f32,
    sun_color: [f32; 3],
    sun_intensity: f32,
    sun_direction: [f32; 3],
    _padding: f32,
}
// Total: 16 + 64 + 16 + 16 + 16 = 128 bytes

/// Type alias for the global uniform buffer
pub type GlobalUBO = UniformBuffer<GlobalUBOContent>;

/// Updates the global uniform buffer with camera and light data
///
/// Called once per frame after the settings store and the scroll rig have
/// written their state into the scene.
pub fn update_global_ubo(
    ubo: &mut GlobalUBO,
    queue: &wgpu::Queue,
    camera: CameraUniform,
    ambient: &AmbientLight,
    sun: &DirectionalLight,
) {
    let content = GlobalUBOContent {
        view_position: camera.view_position,
        view_proj: camera.view_proj,
        ambient_color: ambient.color,
        ambient_intensity: ambient.intensity,
        sun_color: sun.color,
        sun_intensity: sun.intensity,
        sun_direction: sun.direction().into(),
        _padding: 0.0,
    };

    ubo.update_content(queue, content);
}

/// Manages the bind group layout and bind group for global uniforms
///
/// Bound to slot 0 in the render pipeline.
pub struct GlobalBindings {
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: Option<wgpu::BindGroup>,
}

impl GlobalBindings {
    /// Creates the layout; the bind group itself is created once the
    /// uniform buffer exists.
    pub fn new(device: &wgpu::Device) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Globals Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        GlobalBindings {
            bind_group_layout,
            bind_group: None,
        }
    }

    /// Creates the bind group with the provided uniform buffer
    pub fn create_bind_group(&mut self, device: &wgpu::Device, ubo: &GlobalUBO) {
        self.bind_group = Some(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Globals Bind Group"),
            layout: &self.bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.binding_resource(),
            }],
        }));
    }

    /// Returns the bind group layout for pipeline creation
    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    /// Returns the bind group for rendering
    ///
    /// # Panics
    /// Panics if `create_bind_group()` hasn't been called yet
    pub fn bind_group(&self) -> &wgpu::BindGroup {
        self.bind_group
            .as_ref()
            .expect("Bind group has not been created yet!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ubo_content_size_matches_shader_struct() {
        assert_eq!(std::mem::size_of::<GlobalUBOContent>(), 128);
    }
}
