//! Background OBJ model loading
//!
//! [`ModelLoadTask::spawn`] decodes an OBJ/MTL file on a worker thread and
//! delivers `Result<LoadedModel, AssetError>` over an mpsc channel. The UI
//! thread polls the task once per frame with [`ModelLoadTask::poll`] and
//! attaches the model when it arrives; meshes and materials are plain CPU
//! data until the scene uploads them.

use std::{
    path::{Path, PathBuf},
    sync::mpsc::{self, Receiver, TryRecvError},
    thread,
};

use thiserror::Error;

use crate::gfx::{
    resources::material::Material,
    scene::object::{Mesh, Object},
};

/// Errors a model load can end in
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("model file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to decode model {path}: {source}")]
    Decode {
        path: PathBuf,
        source: tobj::LoadError,
    },

    #[error("loader thread exited without a result")]
    WorkerLost,
}

/// A fully decoded model, ready to attach to the scene
pub struct LoadedModel {
    pub object: Object,
    pub materials: Vec<Material>,
}

/// Handle to an in-flight model load
pub struct ModelLoadTask {
    receiver: Receiver<Result<LoadedModel, AssetError>>,
}

impl ModelLoadTask {
    /// Starts loading `path` on a worker thread
    pub fn spawn(path: PathBuf) -> Self {
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || {
            // The receiver may be gone if the app shut down mid-load
            let _ = sender.send(load_model(&path));
        });

        Self { receiver }
    }

    /// Checks for a completed load without blocking
    ///
    /// Returns `None` while the worker is still running. After the first
    /// `Some` the task is spent; further polls report a lost worker.
    pub fn poll(&self) -> Option<Result<LoadedModel, AssetError>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(AssetError::WorkerLost)),
        }
    }
}

/// Decodes an OBJ file into scene meshes and materials
fn load_model(path: &Path) -> Result<LoadedModel, AssetError> {
    if !path.exists() {
        return Err(AssetError::NotFound(path.to_path_buf()));
    }

    let (models, materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
    )
    .map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    // Missing MTL is not fatal; objects fall back to the default material
    let materials = materials.unwrap_or_else(|err| {
        log::warn!("no usable MTL for {}: {err}", path.display());
        Vec::new()
    });

    let scene_materials: Vec<Material> = materials
        .iter()
        .enumerate()
        .map(|(i, mtl)| {
            let name = material_name(mtl, i);
            let diffuse = mtl.diffuse.unwrap_or([0.8, 0.8, 0.8]);
            Material::new(
                &name,
                [
                    diffuse[0],
                    diffuse[1],
                    diffuse[2],
                    mtl.dissolve.unwrap_or(1.0),
                ],
            )
        })
        .collect();

    let mut meshes = Vec::new();
    for m in models.iter() {
        let mesh = &m.mesh;

        // Use normals from the OBJ if present, otherwise calculate them
        let normals = if !mesh.normals.is_empty() && mesh.normals.len() == mesh.positions.len() {
            mesh.normals.clone()
        } else {
            Mesh::calculate_face_normals(&mesh.positions, &mesh.indices)
        };

        meshes.push(Mesh::new(
            mesh.positions.clone(),
            normals,
            mesh.indices.clone(),
        ));
    }

    let mut object = Object::new(meshes);

    if let Some(first_model) = models.first() {
        if !first_model.name.is_empty() {
            object.set_name(first_model.name.clone());
        }

        if let Some(material_id) = first_model.mesh.material_id {
            if material_id < materials.len() {
                object.set_material(&material_name(&materials[material_id], material_id));
            }
        }
    }

    log::info!(
        "loaded model {} ({} meshes, {} materials)",
        path.display(),
        object.meshes.len(),
        scene_materials.len()
    );

    Ok(LoadedModel {
        object,
        materials: scene_materials,
    })
}

fn material_name(mtl: &tobj::Material, index: usize) -> String {
    if mtl.name.is_empty() {
        format!("material_{}", index)
    } else {
        mtl.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reports_not_found() {
        let task = ModelLoadTask::spawn(PathBuf::from("does/not/exist.obj"));

        // The worker finishes quickly for a missing file; poll until it does
        let result = loop {
            if let Some(result) = task.poll() {
                break result;
            }
            thread::sleep(std::time::Duration::from_millis(5));
        };

        assert!(matches!(result, Err(AssetError::NotFound(_))));
    }

    #[test]
    fn test_poll_does_not_block_while_pending() {
        // A channel with a live sender and no message behaves like an
        // in-flight load: poll must return None, not wait.
        let (sender, receiver) = mpsc::channel();
        let task = ModelLoadTask { receiver };
        assert!(task.poll().is_none());
        drop(sender);
        assert!(matches!(task.poll(), Some(Err(AssetError::WorkerLost))));
    }

    #[test]
    fn test_loads_a_minimal_obj() {
        let dir = std::env::temp_dir().join("vista_loader_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("triangle.obj");
        std::fs::write(
            &path,
            "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n",
        )
        .unwrap();

        let model = load_model(&path).unwrap();
        assert_eq!(model.object.meshes.len(), 1);
        assert_eq!(model.object.meshes[0].index_count, 3);
        // No MTL: normals are computed, materials fall back to default
        assert!(model.materials.is_empty());
        assert!(model.object.get_material_id().is_none());
    }
}
