//! Fragment-shader parameter block.
//!
//! `FsParams` is the byte contract with the shader's uniform buffer. Rows are
//! 16 bytes wide and every `vec3` is followed by a scalar so the struct
//! matches WGSL uniform layout rules without implicit padding:
//!
//! | offset | field                         |
//! |--------|-------------------------------|
//! | 0      | `position: vec3<f32>`         |
//! | 12     | `vertical_fov: f32` (degrees) |
//! | 16     | `target: vec3<f32>`           |
//! | 28     | `frame_count: u32`            |
//! | 32     | `up: vec3<f32>`               |
//! | 44     | padding                       |
//! | 48     | `viewport_size: vec2<f32>`    |
//! | 56     | padding                       |
//! | 64     | `debug: DebugBlock`           |
//!
//! Total size is 80 bytes. Bytes are in native order, which is little-endian
//! on every target the renderer supports.

use glam::Vec2;
use serde::Serialize;
use std::mem::{offset_of, size_of};

use crate::camera::ActiveCamera;
use crate::controls::FrameControls;
use crate::frame::FrameInfo;

pub const FS_PARAMS_SIZE: usize = 80;

/// Debug values as laid out for the shader
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize)]
pub struct DebugBlock {
    pub scalar: f32,
    pub render_scale: f32,
    #[serde(skip)]
    pub _pad: [f32; 2],
}

/// Per-frame uniform data for the fragment stage
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize)]
pub struct FsParams {
    pub position: [f32; 3],
    pub vertical_fov: f32,
    pub target: [f32; 3],
    pub frame_count: u32,
    pub up: [f32; 3],
    #[serde(skip)]
    pub _pad0: f32,
    pub viewport_size: [f32; 2],
    #[serde(skip)]
    pub _pad1: [f32; 2],
    pub debug: DebugBlock,
}

const _: () = {
    assert!(size_of::<FsParams>() == FS_PARAMS_SIZE);
    assert!(size_of::<DebugBlock>() == 16);
    assert!(offset_of!(FsParams, position) == 0);
    assert!(offset_of!(FsParams, vertical_fov) == 12);
    assert!(offset_of!(FsParams, target) == 16);
    assert!(offset_of!(FsParams, frame_count) == 28);
    assert!(offset_of!(FsParams, up) == 32);
    assert!(offset_of!(FsParams, viewport_size) == 48);
    assert!(offset_of!(FsParams, debug) == 64);
};

impl FsParams {
    /// Byte image to upload into the uniform buffer
    pub fn encode(&self) -> [u8; FS_PARAMS_SIZE] {
        let mut out = [0u8; FS_PARAMS_SIZE];
        out.copy_from_slice(bytemuck::bytes_of(self));
        out
    }

    /// Read a block back from its byte image. Returns `None` for a slice of
    /// the wrong length.
    pub fn decode(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != FS_PARAMS_SIZE {
            return None;
        }
        Some(bytemuck::pod_read_unaligned(bytes))
    }
}

/// Copy this frame's camera and metadata into the shader layout
pub fn project(
    camera: &ActiveCamera,
    frame: &FrameInfo,
    viewport_size: Vec2,
    controls: &FrameControls,
) -> FsParams {
    FsParams {
        position: camera.position.to_array(),
        vertical_fov: camera.vertical_fov,
        target: camera.target.to_array(),
        frame_count: frame.number,
        up: camera.up.to_array(),
        _pad0: 0.0,
        viewport_size: viewport_size.to_array(),
        _pad1: [0.0; 2],
        debug: DebugBlock {
            scalar: controls.debug.scalar,
            render_scale: controls.render_scale,
            _pad: [0.0; 2],
        },
    }
}
