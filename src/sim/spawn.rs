//! Falling object spawn scheduling
//!
//! Two independent rules feed the pool:
//! - a wall-clock timer adds one object every `interval_ms`
//! - a floor refill tops the pool up to `min_live` immediately

use rand::Rng;

use super::state::FallingObject;
use crate::consts::WIDTH;

/// Uniform x for a new object so it fits fully inside the playfield
pub fn spawn_x<R: Rng + ?Sized>(rng: &mut R, object_width: f32) -> f32 {
    rng.random::<f32>() * (WIDTH - object_width).max(0.0)
}

/// Spawn timer state
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnScheduler {
    /// Timestamp (ms) of the last timer-driven spawn
    pub last_spawn_ms: f64,
    pub interval_ms: f64,
    pub min_live: usize,
}

impl SpawnScheduler {
    pub fn new(interval_ms: f64, min_live: usize) -> Self {
        Self {
            last_spawn_ms: 0.0,
            interval_ms,
            min_live,
        }
    }

    /// Whether the interval has strictly elapsed at `now_ms`
    pub fn is_due(&self, now_ms: f64) -> bool {
        now_ms - self.last_spawn_ms > self.interval_ms
    }

    /// Run both spawn rules for one tick, returning how many objects were added
    pub fn run<R: Rng + ?Sized>(
        &mut self,
        now_ms: f64,
        objects: &mut Vec<FallingObject>,
        object_width: f32,
        rng: &mut R,
    ) -> usize {
        let before = objects.len();

        if self.is_due(now_ms) {
            objects.push(FallingObject::at_top(spawn_x(rng, object_width)));
            self.last_spawn_ms = now_ms;
        }

        while objects.len() < self.min_live {
            objects.push(FallingObject::at_top(spawn_x(rng, object_width)));
        }

        objects.len() - before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const OBJ_W: f32 = 32.0;

    #[test]
    fn test_timer_spawn_plus_floor_refill() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut sched = SpawnScheduler::new(2000.0, 3);
        let mut objects = Vec::new();

        let added = sched.run(2001.0, &mut objects, OBJ_W, &mut rng);
        assert_eq!(added, 3);
        assert_eq!(objects.len(), 3);
        assert_eq!(sched.last_spawn_ms, 2001.0);
    }

    #[test]
    fn test_timer_not_due_on_exact_interval() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut sched = SpawnScheduler::new(2000.0, 0);
        let mut objects = Vec::new();

        assert_eq!(sched.run(2000.0, &mut objects, OBJ_W, &mut rng), 0);
        assert_eq!(sched.last_spawn_ms, 0.0);
        assert_eq!(sched.run(2000.5, &mut objects, OBJ_W, &mut rng), 1);
    }

    #[test]
    fn test_timer_spawn_above_floor() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut sched = SpawnScheduler::new(2000.0, 3);
        let mut objects = vec![FallingObject::at_top(10.0); 5];

        assert_eq!(sched.run(1000.0, &mut objects, OBJ_W, &mut rng), 0);
        assert_eq!(sched.run(2500.0, &mut objects, OBJ_W, &mut rng), 1);
        assert_eq!(objects.len(), 6);
        // Next timer spawn is measured from the last one
        assert_eq!(sched.run(4000.0, &mut objects, OBJ_W, &mut rng), 0);
        assert_eq!(sched.run(4501.0, &mut objects, OBJ_W, &mut rng), 1);
    }

    #[test]
    fn test_spawn_position_matches_injected_source() {
        let mut rng = Pcg32::seed_from_u64(42);
        let expected = rng.clone().random::<f32>() * (WIDTH - OBJ_W);

        let mut sched = SpawnScheduler::new(2000.0, 1);
        let mut objects = Vec::new();
        sched.run(0.0, &mut objects, OBJ_W, &mut rng);

        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].pos.x, expected);
        assert_eq!(objects[0].pos.y, 0.0);
    }

    #[test]
    fn test_spawn_x_stays_in_range() {
        let mut rng = Pcg32::seed_from_u64(99);
        for _ in 0..1000 {
            let x = spawn_x(&mut rng, OBJ_W);
            assert!((0.0..=WIDTH - OBJ_W).contains(&x));
        }
    }
}
