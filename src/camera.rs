use cgmath::SquareMatrix;

/// What the renderer needs from any camera: the two matrices it uploads
/// before a draw.
pub trait Camera {
    fn get_view(&self) -> &cgmath::Matrix4<f32>;
    fn get_projection(&self) -> &cgmath::Matrix4<f32>;
    fn update_matrices(&mut self);
}

#[derive(Debug)]
pub struct PerspectiveCamera {
    pub view: cgmath::Matrix4<f32>,
    pub projection: cgmath::Matrix4<f32>,

    pub position: cgmath::Point3<f32>,
    pub orientation: cgmath::Vector3<f32>,
    pub up: cgmath::Vector3<f32>,

    pub fov: f32, // in deg
    pub aspect_ratio: f32,
    pub near_plane: f32,
    pub far_plane: f32,
}

impl PerspectiveCamera {
    pub fn new(position: cgmath::Point3<f32>, fov: f32, aspect_ratio: f32) -> Self {
        Self {
            view: cgmath::Matrix4::identity(),
            projection: cgmath::Matrix4::identity(),

            position,
            orientation: cgmath::vec3(0.0, 0.0, -1.0),
            up: cgmath::vec3(0.0, 1.0, 0.0),

            fov,
            aspect_ratio,
            near_plane: 0.1,
            far_plane: 100.0,
        }
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }
}

impl Camera for PerspectiveCamera {
    fn get_view(&self) -> &cgmath::Matrix4<f32> {
        &self.view
    }

    fn get_projection(&self) -> &cgmath::Matrix4<f32> {
        &self.projection
    }

    fn update_matrices(&mut self) {
        self.view =
            cgmath::Matrix4::look_at_rh(self.position, self.position + self.orientation, self.up);
        self.projection = cgmath::perspective(
            cgmath::Deg(self.fov),
            self.aspect_ratio,
            self.near_plane,
            self.far_plane,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrices_follow_stored_state() {
        let mut camera = PerspectiveCamera::new(cgmath::point3(0.0, 0.0, 3.0), 45.0, 16.0 / 9.0);
        camera.update_matrices();

        let expected_view = cgmath::Matrix4::look_at_rh(
            cgmath::point3(0.0, 0.0, 3.0),
            cgmath::point3(0.0, 0.0, 2.0),
            cgmath::vec3(0.0, 1.0, 0.0),
        );
        let expected_projection =
            cgmath::perspective(cgmath::Deg(45.0), 16.0 / 9.0, 0.1, 100.0);

        assert_eq!(*camera.get_view(), expected_view);
        assert_eq!(*camera.get_projection(), expected_projection);
    }

    #[test]
    fn resize_changes_projection() {
        let mut camera = PerspectiveCamera::new(cgmath::point3(0.0, 0.0, 3.0), 45.0, 1.0);
        camera.update_matrices();
        let square = camera.projection;

        camera.set_aspect_ratio(2.0);
        camera.update_matrices();
        assert_ne!(camera.projection, square);
    }
}
