//! Material system
//!
//! Flat-color materials extracted from the model's MTL definitions, stored
//! centrally in [`MaterialManager`] and referenced by objects by name. The
//! shader only consumes the base color; everything else about shading comes
//! from the global lights.

use std::collections::HashMap;
use wgpu::Device;

use crate::wgpu_utils::uniform_buffer::UniformBuffer;

/// Material ID for referencing materials
pub type MaterialId = String;

/// GPU uniform data for materials
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub base_color: [f32; 4],
}

type MaterialUBO = UniformBuffer<MaterialUniform>;

/// Material bind group management
pub struct MaterialBindings {
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: Option<wgpu::BindGroup>,
}

impl MaterialBindings {
    pub fn new(device: &Device) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Material Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        MaterialBindings {
            bind_group_layout,
            bind_group: None,
        }
    }

    pub fn create_bind_group(&mut self, device: &Device, ubo: &MaterialUBO) {
        self.bind_group = Some(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Material Bind Group"),
            layout: &self.bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.binding_resource(),
            }],
        }));
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }
}

/// Material definition with a base color
///
/// GPU resources are shared by all objects using this material.
pub struct Material {
    pub name: String,
    pub base_color: [f32; 4],

    material_ubo: Option<MaterialUBO>,
    material_bindings: Option<MaterialBindings>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            base_color: [0.8, 0.8, 0.8, 1.0],
            material_ubo: None,
            material_bindings: None,
        }
    }
}

impl Material {
    pub fn new(name: &str, base_color: [f32; 4]) -> Self {
        Self {
            name: name.to_string(),
            base_color,
            material_ubo: None,
            material_bindings: None,
        }
    }

    /// Creates or refreshes GPU resources for this material
    pub fn update_gpu_resources(&mut self, device: &Device, queue: &wgpu::Queue) {
        if self.material_ubo.is_none() {
            self.material_ubo = Some(MaterialUBO::new(device));
        }

        if self.material_bindings.is_none() {
            let mut bindings = MaterialBindings::new(device);
            if let Some(ubo) = &self.material_ubo {
                bindings.create_bind_group(device, ubo);
            }
            self.material_bindings = Some(bindings);
        }

        let uniform_data = MaterialUniform {
            base_color: self.base_color,
        };

        if let Some(ubo) = &mut self.material_ubo {
            ubo.update_content(queue, uniform_data);
        }
    }

    /// Gets the bind group for rendering, if GPU resources exist
    pub fn get_bind_group(&self) -> Option<&wgpu::BindGroup> {
        self.material_bindings
            .as_ref()
            .and_then(|bindings| bindings.bind_group.as_ref())
    }
}

/// Centralized storage for all materials
///
/// Objects reference materials by ID rather than owning material data,
/// so GPU resources are shared between objects.
pub struct MaterialManager {
    materials: HashMap<MaterialId, Material>,
    default_material_id: MaterialId,
}

impl MaterialManager {
    /// Creates a new material manager with a default material
    pub fn new() -> Self {
        let mut manager = Self {
            materials: HashMap::new(),
            default_material_id: "default".to_string(),
        };

        manager
            .materials
            .insert("default".to_string(), Material::default());

        manager
    }

    pub fn add_material(&mut self, material: Material) {
        self.materials.insert(material.name.clone(), material);
    }

    pub fn get_material(&self, id: &MaterialId) -> Option<&Material> {
        self.materials.get(id)
    }

    pub fn get_default_material(&self) -> &Material {
        // The default is inserted in new() and never removed
        &self.materials[&self.default_material_id]
    }

    /// Gets material for an object with fallback to the default
    pub fn get_material_for_object(&self, material_id: Option<&MaterialId>) -> &Material {
        match material_id {
            Some(id) => self
                .get_material(id)
                .unwrap_or_else(|| self.get_default_material()),
            None => self.get_default_material(),
        }
    }

    /// Updates GPU resources for all materials
    pub fn update_all_gpu_resources(&mut self, device: &Device, queue: &wgpu::Queue) {
        for material in self.materials.values_mut() {
            material.update_gpu_resources(device, queue);
        }
    }
}

impl Default for MaterialManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_starts_with_default_material() {
        let manager = MaterialManager::new();
        assert_eq!(manager.get_default_material().name, "default");
    }

    #[test]
    fn test_unknown_material_falls_back_to_default() {
        let manager = MaterialManager::new();
        let missing = "granite".to_string();
        let material = manager.get_material_for_object(Some(&missing));
        assert_eq!(material.name, "default");

        let material = manager.get_material_for_object(None);
        assert_eq!(material.name, "default");
    }

    #[test]
    fn test_added_material_is_found_by_name() {
        let mut manager = MaterialManager::new();
        manager.add_material(Material::new("bark", [0.4, 0.25, 0.1, 1.0]));
        let id = "bark".to_string();
        assert_eq!(
            manager.get_material_for_object(Some(&id)).base_color,
            [0.4, 0.25, 0.1, 1.0]
        );
    }
}
