//! Camera state, projection and picking rays.
//!
//! The gallery camera is a look-at camera: it sits at [`Camera::position`] and
//! always looks at the point `(target.x, target.y, focal_plane)`. Zooming sets a
//! new [`Camera::target`] and the `easing` flag; [`Camera::ease`] then moves the
//! position a fixed fraction of the remaining distance per frame.

use cgmath::{EuclideanSpace, InnerSpace, Matrix4, Point3, Rad, SquareMatrix, Vector2, Vector3, Vector4};

use crate::config::ArrivalCheck;

/// Maps OpenGL clip space (z in -1..1) onto wgpu clip space (z in 0..1).
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub easing: bool,
}

impl Camera {
    /// A resting camera at `position` whose target is its own position.
    pub fn new<P: Into<Point3<f32>>>(position: P) -> Self {
        let position = position.into();
        Self {
            position,
            target: position,
            easing: false,
        }
    }

    /// Replace the target and start easing towards it. Any ease in progress is
    /// abandoned.
    pub fn zoom_to<P: Into<Point3<f32>>>(&mut self, target: P) {
        self.target = target.into();
        self.easing = true;
    }

    /// Advance one frame towards the target.
    ///
    /// Every axis covers `factor` of its remaining distance. Returns `true` on
    /// the frame the camera arrives, which also clears `easing`.
    pub fn ease(&mut self, factor: f32, tolerance: f32, check: ArrivalCheck) -> bool {
        if !self.easing {
            return false;
        }
        let remaining = self.target - self.position;
        self.position += remaining * factor;

        let left = self.target - self.position;
        let arrived = match check {
            ArrivalCheck::DepthOnly => left.z.abs() < tolerance,
            ArrivalCheck::AllAxes => {
                left.x.abs() < tolerance && left.y.abs() < tolerance && left.z.abs() < tolerance
            }
        };
        if arrived {
            self.easing = false;
        }
        arrived
    }

    /// The point the camera looks at.
    pub fn look_at_point(&self, focal_plane: f32) -> Point3<f32> {
        Point3::new(self.target.x, self.target.y, focal_plane)
    }

    pub fn calc_matrix(&self, focal_plane: f32) -> Matrix4<f32> {
        Matrix4::look_at_rh(
            self.position,
            self.look_at_point(focal_plane),
            Vector3::unit_y(),
        )
    }

    /// Cast a ray from the camera through a point given in normalized device
    /// coordinates (x right, y up, both in -1..1).
    ///
    /// Returns `None` when the view-projection matrix is singular, which only
    /// happens for a degenerate projection.
    pub fn cast_ray(
        &self,
        ndc: Vector2<f32>,
        projection: &Projection,
        focal_plane: f32,
    ) -> Option<Ray> {
        let view_proj = projection.calc_gl_matrix() * self.calc_matrix(focal_plane);
        let inverse = view_proj.invert()?;
        let far = inverse * Vector4::new(ndc.x, ndc.y, 1.0, 1.0);
        if far.w.abs() <= f32::EPSILON {
            return None;
        }
        let far = Point3::from_vec(far.truncate() / far.w);
        let direction = far - self.position;
        if direction.magnitude2() <= f32::EPSILON {
            return None;
        }
        Some(Ray {
            origin: self.position,
            direction: direction.normalize(),
        })
    }
}

/// Perspective projection parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    aspect: f32,
    fovy: Rad<f32>,
    znear: f32,
    zfar: f32,
}

impl Projection {
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width.max(1) as f32 / height.max(1) as f32,
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn fovy(&self) -> Rad<f32> {
        self.fovy
    }

    /// Projection in OpenGL clip space. Used for unprojecting rays.
    fn calc_gl_matrix(&self) -> Matrix4<f32> {
        cgmath::perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }

    /// Projection in wgpu clip space.
    pub fn calc_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * self.calc_gl_matrix()
    }
}

/// A half-line with a unit-length direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn at(&self, distance: f32) -> Point3<f32> {
        self.origin + self.direction * distance
    }
}

/// The camera data the shaders see.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_position: [f32; 4],
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: Matrix4::identity().into(),
        }
    }

    pub fn update_view_proj(&mut self, camera: &Camera, projection: &Projection, focal_plane: f32) {
        self.view_position = camera.position.to_homogeneous().into();
        self.view_proj = (projection.calc_matrix() * camera.calc_matrix(focal_plane)).into();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

/// The camera uniform together with its GPU buffer and bind group.
#[derive(Debug)]
pub struct CameraResources {
    pub uniform: CameraUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl CameraResources {
    pub fn new(device: &wgpu::Device, uniform: CameraUniform) -> Self {
        use wgpu::util::DeviceExt;

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
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
            label: Some("camera_bind_group_layout"),
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some("camera_bind_group"),
        });

        Self {
            uniform,
            buffer,
            bind_group,
            bind_group_layout,
        }
    }

    pub fn update(
        &mut self,
        queue: &wgpu::Queue,
        camera: &Camera,
        projection: &Projection,
        focal_plane: f32,
    ) {
        self.uniform.update_view_proj(camera, projection, focal_plane);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}
