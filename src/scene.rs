//! Decorative background scene: a fixed ensemble of floating shapes, a
//! pointer follower and an ambient particle field, all advanced in one pass
//! per frame from the scaled motion clock.

use crate::motion::MotionClock;

pub const CAMERA_Z: f64 = 8.0;
pub const CAMERA_FOV_DEG: f64 = 50.0;
pub const NEAR_PLANE: f64 = 0.1;
pub const PARTICLE_COUNT: usize = 80;
pub const PARTICLE_COLOR: &str = "#6366f1";
pub const FOLLOWER_COLOR: &str = "#a855f7";
pub const FOLLOWER_RADIUS: f64 = 0.15;
pub const FOLLOWER_START_Z: f64 = 2.0;
pub const FOLLOWER_LERP: f64 = 0.05;
pub const FOLLOWER_REACH: f64 = 0.3;
pub const FALLBACK_COLOR: &str = "#6366f1";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Icosahedron,
    Torus,
    Sphere,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatMotion {
    pub speed: f64,
    pub rotation_intensity: f64,
    pub float_intensity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeDescriptor {
    pub kind: ShapeKind,
    pub position: [f64; 3],
    pub color: &'static str,
    pub radius: f64,
    pub opacity: f64,
    pub float: FloatMotion,
}

const ICOSAHEDRON_FLOAT: FloatMotion = FloatMotion {
    speed: 1.5,
    rotation_intensity: 0.5,
    float_intensity: 0.8,
};
const TORUS_FLOAT: FloatMotion = FloatMotion {
    speed: 2.0,
    rotation_intensity: 0.8,
    float_intensity: 1.0,
};
const SPHERE_FLOAT: FloatMotion = FloatMotion {
    speed: 1.0,
    rotation_intensity: 0.3,
    float_intensity: 0.5,
};

const fn icosahedron(position: [f64; 3], color: &'static str) -> ShapeDescriptor {
    ShapeDescriptor {
        kind: ShapeKind::Icosahedron,
        position,
        color,
        radius: 0.8,
        opacity: 0.8,
        float: ICOSAHEDRON_FLOAT,
    }
}

const fn torus(position: [f64; 3], color: &'static str) -> ShapeDescriptor {
    ShapeDescriptor {
        kind: ShapeKind::Torus,
        position,
        color,
        radius: 0.6,
        opacity: 0.75,
        float: TORUS_FLOAT,
    }
}

const fn sphere(position: [f64; 3], color: &'static str) -> ShapeDescriptor {
    ShapeDescriptor {
        kind: ShapeKind::Sphere,
        position,
        color,
        radius: 0.8,
        opacity: 0.7,
        float: SPHERE_FLOAT,
    }
}

pub const SHAPES: [ShapeDescriptor; 6] = [
    icosahedron([-4.0, 2.0, -3.0], "#6366f1"),
    torus([4.0, -1.0, -4.0], "#a855f7"),
    sphere([-3.0, -2.0, -2.0], "#ec4899"),
    icosahedron([3.0, 2.5, -5.0], "#06b6d4"),
    torus([-5.0, 0.0, -6.0], "#8b5cf6"),
    sphere([5.0, -2.0, -3.0], "#f43f5e"),
];

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub position: [f64; 3],
    pub rotation: [f64; 3],
}

/// Pose of shape `index` after `elapsed` seconds.
pub fn shape_pose(descriptor: &ShapeDescriptor, index: usize, elapsed: f64) -> Pose {
    let [x, y, z] = descriptor.position;
    let mut pose = Pose {
        position: [x, y, z],
        rotation: [0.0; 3],
    };

    match descriptor.kind {
        ShapeKind::Icosahedron => {
            pose.rotation[0] = elapsed * 0.2;
            pose.rotation[1] = elapsed * 0.3;
        }
        ShapeKind::Torus => {
            pose.rotation[0] = elapsed * 0.3;
            pose.rotation[2] = elapsed * 0.2;
        }
        ShapeKind::Sphere => {
            pose.position[1] = y + (elapsed * 0.5).sin() * 0.3;
        }
    }

    let float = descriptor.float;
    let phase = (index as f64 * 1.7 + elapsed) / 4.0 * float.speed;
    pose.rotation[0] += phase.cos() / 8.0 * float.rotation_intensity;
    pose.rotation[1] += phase.sin() / 8.0 * float.rotation_intensity;
    pose.rotation[2] += phase.sin() / 20.0 * float.rotation_intensity;
    pose.position[1] += phase.sin() / 10.0 * float.float_intensity;

    pose
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub origin: [f64; 3],
    pub scale: f64,
    pub position: [f64; 3],
}

/// Scatters `count` particles using `random`, which must yield values in `[0, 1)`.
pub fn scatter_particles(count: usize, mut random: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let x = (random() - 0.5) * 20.0;
            let y = (random() - 0.5) * 20.0;
            let z = (random() - 0.5) * 10.0 - 5.0;
            let scale = random() * 0.05 + 0.02;
            Particle {
                origin: [x, y, z],
                scale,
                position: [x, y, z],
            }
        })
        .collect()
}

pub fn particle_offset(index: usize, elapsed: f64) -> f64 {
    (elapsed * 0.3 + index as f64).sin() * 0.1
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn aspect(&self) -> f64 {
        if self.height <= 0.0 {
            1.0
        } else {
            self.width / self.height
        }
    }

    /// Visible world-space extent of the `z = 0` plane.
    pub fn world_extent(&self) -> (f64, f64) {
        let height = 2.0 * CAMERA_Z * (CAMERA_FOV_DEG.to_radians() / 2.0).tan();
        (height * self.aspect(), height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub pixels_per_unit: f64,
    pub depth: f64,
}

pub fn project(point: [f64; 3], viewport: ViewportSize) -> Option<Projected> {
    let depth = CAMERA_Z - point[2];
    if depth <= NEAR_PLANE || viewport.width <= 0.0 || viewport.height <= 0.0 {
        return None;
    }

    let half_height = depth * (CAMERA_FOV_DEG.to_radians() / 2.0).tan();
    let half_width = half_height * viewport.aspect();
    let ndc_x = point[0] / half_width;
    let ndc_y = point[1] / half_height;

    Some(Projected {
        x: (ndc_x + 1.0) / 2.0 * viewport.width,
        y: (1.0 - ndc_y) / 2.0 * viewport.height,
        pixels_per_unit: viewport.height / 2.0 / half_height,
        depth,
    })
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Follower {
    pub position: [f64; 3],
    pub rotation: [f64; 3],
}

impl Default for Follower {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, FOLLOWER_START_Z],
            rotation: [0.0; 3],
        }
    }
}

impl Follower {
    /// Moves toward the normalized pointer (`[-1, 1]` on both axes, y up).
    pub fn follow(&mut self, pointer: [f64; 2], viewport: ViewportSize) {
        let (width, height) = viewport.world_extent();
        let x = pointer[0].clamp(-1.0, 1.0) * width / 2.0;
        let y = pointer[1].clamp(-1.0, 1.0) * height / 2.0;
        let target = [x * FOLLOWER_REACH, y * FOLLOWER_REACH, 0.0];

        for (axis, goal) in target.iter().enumerate() {
            self.position[axis] += (goal - self.position[axis]) * FOLLOWER_LERP;
        }
        self.rotation[0] = y * 0.1;
        self.rotation[1] = x * 0.1;
    }
}

pub struct ShapeInstance {
    pub descriptor: ShapeDescriptor,
    pub pose: Pose,
}

pub struct Scene {
    pub shapes: Vec<ShapeInstance>,
    pub particles: Vec<Particle>,
    pub follower: Follower,
    clock: MotionClock,
}

impl Scene {
    pub fn new(reduced_motion: bool, random: impl FnMut() -> f64) -> Self {
        let clock = if reduced_motion {
            MotionClock::frozen()
        } else {
            MotionClock::new()
        };

        let mut scene = Self {
            shapes: SHAPES
                .iter()
                .map(|descriptor| ShapeInstance {
                    descriptor: *descriptor,
                    pose: Pose::default(),
                })
                .collect(),
            particles: scatter_particles(PARTICLE_COUNT, random),
            follower: Follower::default(),
            clock,
        };
        scene.update_poses();
        scene
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.clock.elapsed_seconds()
    }

    pub fn is_frozen(&self) -> bool {
        self.clock.is_frozen()
    }

    pub fn advance(&mut self, delta_ms: f64, pointer: [f64; 2], viewport: ViewportSize) {
        self.clock.advance(delta_ms);
        if !self.clock.is_frozen() {
            self.follower.follow(pointer, viewport);
        }
        self.update_poses();
    }

    fn update_poses(&mut self) {
        let elapsed = self.clock.elapsed_seconds();

        for (index, shape) in self.shapes.iter_mut().enumerate() {
            shape.pose = shape_pose(&shape.descriptor, index, elapsed);
        }

        for (index, particle) in self.particles.iter_mut().enumerate() {
            particle.position = particle.origin;
            particle.position[1] += particle_offset(index, elapsed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(mut state: u64) -> impl FnMut() -> f64 {
        move || {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            (state >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    const VIEWPORT: ViewportSize = ViewportSize {
        width: 1280.0,
        height: 720.0,
    };

    fn snapshot(scene: &Scene) -> (Vec<Pose>, Vec<[f64; 3]>, Follower) {
        (
            scene.shapes.iter().map(|shape| shape.pose).collect(),
            scene.particles.iter().map(|p| p.position).collect(),
            scene.follower,
        )
    }

    #[test]
    fn scene_is_built_from_the_static_descriptors() {
        let scene = Scene::new(false, seeded(7));
        assert_eq!(scene.shapes.len(), SHAPES.len());
        assert_eq!(scene.particles.len(), PARTICLE_COUNT);
        assert_eq!(scene.shapes[2].descriptor.kind, ShapeKind::Sphere);
    }

    #[test]
    fn particles_fill_the_spawn_volume() {
        for particle in scatter_particles(500, seeded(42)) {
            let [x, y, z] = particle.origin;
            assert!((-10.0..10.0).contains(&x));
            assert!((-10.0..10.0).contains(&y));
            assert!((-10.0..0.0).contains(&z));
            assert!((0.02..0.07).contains(&particle.scale));
        }
    }

    #[test]
    fn particles_are_desynchronized_by_index() {
        assert_ne!(particle_offset(0, 1.0), particle_offset(1, 1.0));
        assert!(particle_offset(3, 12.0).abs() <= 0.1);
    }

    #[test]
    fn poses_are_a_pure_function_of_time() {
        let a = shape_pose(&SHAPES[0], 0, 3.5);
        let b = shape_pose(&SHAPES[0], 0, 3.5);
        assert_eq!(a, b);
        assert_ne!(a, shape_pose(&SHAPES[0], 0, 4.0));
    }

    #[test]
    fn reduced_motion_freezes_every_animation() {
        let mut scene = Scene::new(true, seeded(1));
        let before = snapshot(&scene);

        scene.advance(1_000.0, [0.8, -0.4], VIEWPORT);
        assert_eq!(snapshot(&scene), before);
        assert_eq!(scene.elapsed_seconds(), 0.0);
    }

    #[test]
    fn follower_eases_toward_the_pointer() {
        let mut scene = Scene::new(false, seeded(3));
        let (world_width, _) = VIEWPORT.world_extent();
        let target_x = world_width / 2.0 * FOLLOWER_REACH;

        scene.advance(16.0, [1.0, 0.0], VIEWPORT);
        let first = scene.follower.position[0];
        assert!((first - target_x * FOLLOWER_LERP).abs() < 1e-9);

        for _ in 0..400 {
            scene.advance(16.0, [1.0, 0.0], VIEWPORT);
        }
        assert!((scene.follower.position[0] - target_x).abs() < 1e-3);
        assert!(scene.follower.position[2].abs() < 1e-3);
    }

    #[test]
    fn projection_centers_the_origin() {
        let center = project([0.0, 0.0, 0.0], VIEWPORT).expect("origin is visible");
        assert!((center.x - 640.0).abs() < 1e-9);
        assert!((center.y - 360.0).abs() < 1e-9);

        let far = project([0.0, 0.0, -6.0], VIEWPORT).expect("far point is visible");
        assert!(far.pixels_per_unit < center.pixels_per_unit);
        assert!(project([0.0, 0.0, CAMERA_Z], VIEWPORT).is_none());
    }
}
