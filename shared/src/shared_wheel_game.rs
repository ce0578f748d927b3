use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::WheelError;
use crate::prize::{slot_of, total_weight, validate_prizes, Prize};

// Tuning for the spin animation
pub const SPIN_DURATION_MS: u32 = 5000;  // Length of the wheel's CSS transition
pub const RESULT_DELAY_MS: u32 = 500;    // Pause between the wheel stopping and the result modal
pub const MIN_SPINS: u32 = 6;            // Minimum number of full rotations
pub const MAX_SPINS: u32 = 9;            // Maximum number of full rotations
pub const EDGE_MARGIN_DEGREES: f64 = 2.0;

const FULL_TURN: f64 = 360.0;

/// Presentation tuning for a spin. None of this changes which prize wins.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpinConfig {
    pub min_extra_spins: u32,
    pub max_extra_spins: u32,
    /// Jitter never brings the pointer closer than this to a slice edge.
    pub edge_margin_degrees: f64,
    pub spin_duration_ms: u32,
    pub result_delay_ms: u32,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            min_extra_spins: MIN_SPINS,
            max_extra_spins: MAX_SPINS,
            edge_margin_degrees: EDGE_MARGIN_DEGREES,
            spin_duration_ms: SPIN_DURATION_MS,
            result_delay_ms: RESULT_DELAY_MS,
        }
    }
}

impl SpinConfig {
    /// Parses tuning from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, WheelError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), WheelError> {
        if self.min_extra_spins < 2 {
            return Err(WheelError::InvalidConfiguration(
                "a spin needs at least 2 full turns".to_string(),
            ));
        }
        if self.min_extra_spins > self.max_extra_spins {
            return Err(WheelError::InvalidConfiguration(format!(
                "extra spin range {}..={} is empty",
                self.min_extra_spins, self.max_extra_spins
            )));
        }
        if !self.edge_margin_degrees.is_finite() || self.edge_margin_degrees < 0.0 {
            return Err(WheelError::InvalidConfiguration(format!(
                "edge margin {} must be a non-negative number of degrees",
                self.edge_margin_degrees
            )));
        }
        Ok(())
    }
}

/// Outcome of one spin: the committed prize and where the wheel must stop.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinResult {
    pub prize: Prize,
    pub slot_index: usize,
    pub extra_spins: u32,
    pub target_rotation_degrees: f64,
}

/// Represents the wheel as the UI sees it: accumulated rotation plus the
/// one-spin-at-a-time guard.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WheelGame {
    pub is_spinning: bool,
    pub rotation: f64,
    pub last_result: Option<SpinResult>,
    pub config: SpinConfig,
}

impl Default for WheelGame {
    fn default() -> Self {
        Self::new()
    }
}

impl WheelGame {
    pub fn new() -> Self {
        Self::with_config(SpinConfig::default())
    }

    pub fn with_config(config: SpinConfig) -> Self {
        Self {
            is_spinning: false,
            rotation: 0.0,
            last_result: None,
            config,
        }
    }

    /// Draws a prize and advances the rotation. Rejected while a previous
    /// spin has not been completed.
    pub fn start_spin<R: Rng>(
        &mut self,
        prizes: &[Prize],
        rng: &mut R,
    ) -> Result<SpinResult, WheelError> {
        if self.is_spinning {
            warn!("Rejected spin request while the wheel is still turning");
            return Err(WheelError::SpinInProgress);
        }

        let result = spin(self.rotation, prizes, &self.config, rng)?;
        self.rotation = result.target_rotation_degrees;
        self.is_spinning = true;
        self.last_result = Some(result.clone());
        Ok(result)
    }

    /// Called once the animation has finished. Returns the prize that was
    /// committed when the spin started.
    pub fn complete_spin(&mut self) -> Option<Prize> {
        if !self.is_spinning {
            return None;
        }
        self.is_spinning = false;
        self.last_result.as_ref().map(|r| r.prize.clone())
    }
}

pub fn slice_angle(count: usize) -> f64 {
    FULL_TURN / count as f64
}

/// Clockwise angle from the top to the middle of slot `index`.
pub fn slice_center_angle(index: usize, count: usize) -> f64 {
    let slice = slice_angle(count);
    index as f64 * slice + slice / 2.0
}

/// Slot sitting under the top pointer once the wheel has been turned
/// clockwise by `rotation` degrees.
pub fn pointer_slot(rotation: f64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let wheel_angle = (-rotation).rem_euclid(FULL_TURN);
    let slot = (wheel_angle / slice_angle(count)).floor() as usize;
    slot.min(count - 1)
}

/// Returns the prize whose cumulative weight interval contains `point`.
/// `point` must lie in `[0, total_weight)`.
pub fn select_by_point(prizes: &[Prize], point: f64) -> Result<&Prize, WheelError> {
    validate_prizes(prizes)?;

    let total = total_weight(prizes);
    if !point.is_finite() || point < 0.0 || point >= total {
        return Err(WheelError::InvalidArgument(format!(
            "draw point {} is outside [0, {})",
            point, total
        )));
    }

    Ok(locate(prizes, point))
}

/// Interval lookup over a set that has already been validated.
fn locate(prizes: &[Prize], point: f64) -> &Prize {
    let mut cumulative = 0.0;
    let mut last_positive = &prizes[0];
    for prize in prizes {
        if prize.weight > 0.0 {
            cumulative += prize.weight;
            last_positive = prize;
            if point < cumulative {
                return prize;
            }
        }
    }

    // Rounding can leave `point` a hair past the last boundary.
    last_positive
}

/// Weighted draw using the thread-local generator.
pub fn draw(prizes: &[Prize]) -> Result<Prize, WheelError> {
    draw_with_rng(prizes, &mut rand::thread_rng())
}

pub fn draw_with_rng<R: Rng>(prizes: &[Prize], rng: &mut R) -> Result<Prize, WheelError> {
    validate_prizes(prizes)?;
    Ok(draw_validated(prizes, rng))
}

fn draw_validated<R: Rng>(prizes: &[Prize], rng: &mut R) -> Prize {
    let total = total_weight(prizes);
    let point = rng.gen_range(0.0..total);
    let winner = locate(prizes, point);

    debug!("Drew prize {} ({}) at {:.3} of {:.3}", winner.id, winner.label, point, total);
    winner.clone()
}

/// Target rotation with the default tuning and the thread-local generator.
pub fn compute_target_rotation(
    current_rotation: f64,
    prizes: &[Prize],
    winner: &Prize,
) -> Result<f64, WheelError> {
    compute_target_rotation_with_rng(
        current_rotation,
        prizes,
        winner,
        &SpinConfig::default(),
        &mut rand::thread_rng(),
    )
}

pub fn compute_target_rotation_with_rng<R: Rng>(
    current_rotation: f64,
    prizes: &[Prize],
    winner: &Prize,
    config: &SpinConfig,
    rng: &mut R,
) -> Result<f64, WheelError> {
    validate_prizes(prizes)?;
    config.validate()?;
    plan_rotation(current_rotation, prizes, winner, config, rng).map(|plan| plan.target)
}

/// Draws a winner and works out where the wheel has to stop for it.
pub fn spin<R: Rng>(
    current_rotation: f64,
    prizes: &[Prize],
    config: &SpinConfig,
    rng: &mut R,
) -> Result<SpinResult, WheelError> {
    validate_prizes(prizes)?;
    config.validate()?;

    let prize = draw_validated(prizes, rng);
    let plan = plan_rotation(current_rotation, prizes, &prize, config, rng)?;

    debug!(
        "Spin lands on slot {} after {} extra turns, rotation {:.2} -> {:.2}",
        plan.slot_index, plan.extra_spins, current_rotation, plan.target
    );

    Ok(SpinResult {
        prize,
        slot_index: plan.slot_index,
        extra_spins: plan.extra_spins,
        target_rotation_degrees: plan.target,
    })
}

struct RotationPlan {
    slot_index: usize,
    extra_spins: u32,
    target: f64,
}

/// Expects `prizes` and `config` to have been validated already.
fn plan_rotation<R: Rng>(
    current_rotation: f64,
    prizes: &[Prize],
    winner: &Prize,
    config: &SpinConfig,
    rng: &mut R,
) -> Result<RotationPlan, WheelError> {
    if !current_rotation.is_finite() {
        return Err(WheelError::InvalidArgument(format!(
            "current rotation {} is not a finite angle",
            current_rotation
        )));
    }

    let slot_index = slot_of(prizes, winner).ok_or_else(|| {
        WheelError::InvalidArgument(format!("prize {} is not on this wheel", winner.id))
    })?;

    let count = prizes.len();
    let slice = slice_angle(count);
    let center = slice_center_angle(slot_index, count);

    let extra_spins = rng.gen_range(config.min_extra_spins..=config.max_extra_spins);

    // Narrow slices leave no room for jitter; stop dead center instead.
    let max_jitter = (slice / 2.0 - config.edge_margin_degrees).max(0.0);
    let jitter = if max_jitter > 0.0 {
        rng.gen_range(-max_jitter..=max_jitter)
    } else {
        0.0
    };

    let delta = extra_spins as f64 * FULL_TURN + (FULL_TURN - center) + jitter;

    Ok(RotationPlan {
        slot_index,
        extra_spins,
        target: current_rotation + delta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prize::PrizeSet;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog() -> Vec<Prize> {
        PrizeSet::default_catalog().prizes().to_vec()
    }

    #[test]
    fn test_weighted_fairness() {
        let prizes = catalog();
        let mut rng = StdRng::seed_from_u64(42);
        let draws = 100_000;
        let mut counts = vec![0usize; prizes.len()];

        for _ in 0..draws {
            let prize = draw_with_rng(&prizes, &mut rng).unwrap();
            let index = prizes.iter().position(|p| p.id == prize.id).unwrap();
            counts[index] += 1;
        }

        for (prize, count) in prizes.iter().zip(counts) {
            let observed = count as f64 / draws as f64 * 100.0;
            assert!(
                (observed - prize.weight).abs() <= 1.0,
                "prize {} drawn {:.2}% of the time, expected {}%",
                prize.label,
                observed,
                prize.weight
            );
        }
    }

    #[test]
    fn test_zero_weight_never_drawn() {
        let prizes = vec![
            Prize::new(1, "Nothing", 0.0),
            Prize::new(2, "Voucher", 3.0),
            Prize::new(3, "Also nothing", 0.0),
            Prize::new(4, "Balo", 1.0),
        ];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20_000 {
            let prize = draw_with_rng(&prizes, &mut rng).unwrap();
            assert!(prize.id == 2 || prize.id == 4);
        }
    }

    #[test]
    fn test_single_prize_always_wins() {
        let prizes = vec![Prize::new(9, "Only", 0.5)];
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(draw_with_rng(&prizes, &mut rng).unwrap().id, 9);
        }
        assert_eq!(draw(&prizes).unwrap().id, 9);
    }

    #[test]
    fn test_select_by_point_uses_cumulative_ranges() {
        let prizes = catalog();
        assert_eq!(select_by_point(&prizes, 0.0).unwrap().id, 1);
        assert_eq!(select_by_point(&prizes, 19.999).unwrap().id, 1);
        assert_eq!(select_by_point(&prizes, 20.0).unwrap().id, 2);
        assert_eq!(select_by_point(&prizes, 21.0).unwrap().id, 2);
        assert_eq!(select_by_point(&prizes, 25.0).unwrap().id, 3);
        assert_eq!(select_by_point(&prizes, 99.5).unwrap().id, 8);
    }

    #[test]
    fn test_select_by_point_skips_zero_weight() {
        let prizes = vec![
            Prize::new(1, "A", 2.0),
            Prize::new(2, "Empty", 0.0),
            Prize::new(3, "B", 2.0),
        ];
        assert_eq!(select_by_point(&prizes, 2.0).unwrap().id, 3);
    }

    #[test]
    fn test_select_by_point_rejects_out_of_range() {
        let prizes = catalog();
        assert!(matches!(select_by_point(&prizes, 100.0), Err(WheelError::InvalidArgument(_))));
        assert!(matches!(select_by_point(&prizes, -0.1), Err(WheelError::InvalidArgument(_))));
        assert!(matches!(select_by_point(&prizes, f64::NAN), Err(WheelError::InvalidArgument(_))));
    }

    #[test]
    fn test_draw_rejects_bad_configuration() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(draw_with_rng(&[], &mut rng), Err(WheelError::InvalidConfiguration(_))));

        let zeros = vec![Prize::new(1, "A", 0.0), Prize::new(2, "B", 0.0)];
        assert!(matches!(draw_with_rng(&zeros, &mut rng), Err(WheelError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_draw_rejects_overflowing_weights() {
        let huge = vec![Prize::new(1, "A", f64::MAX), Prize::new(2, "B", f64::MAX)];
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(draw_with_rng(&huge, &mut rng), Err(WheelError::InvalidConfiguration(_))));
        assert!(matches!(select_by_point(&huge, 1.0), Err(WheelError::InvalidConfiguration(_))));
        assert!(matches!(
            spin(0.0, &huge, &SpinConfig::default(), &mut rng),
            Err(WheelError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_rotation_lands_inside_winning_slice() {
        let prizes = catalog();
        let n = prizes.len() as f64;
        let slice = 360.0 / n;
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..200 {
            for (i, winner) in prizes.iter().enumerate() {
                let delta = compute_target_rotation_with_rng(
                    0.0,
                    &prizes,
                    winner,
                    &SpinConfig::default(),
                    &mut rng,
                )
                .unwrap();

                let stop = 360.0 - delta.rem_euclid(360.0);
                let low = i as f64 * slice + EDGE_MARGIN_DEGREES;
                let high = (i + 1) as f64 * slice - EDGE_MARGIN_DEGREES;
                assert!(
                    stop >= low - 1e-9 && stop <= high + 1e-9,
                    "slot {} stopped at {:.3}, expected [{:.3}, {:.3}]",
                    i,
                    stop,
                    low,
                    high
                );
                assert_eq!(pointer_slot(delta, prizes.len()), i);
            }
        }
    }

    #[test]
    fn test_rotation_includes_configured_turns() {
        let prizes = catalog();
        let mut rng = StdRng::seed_from_u64(11);
        let config = SpinConfig::default();
        for winner in &prizes {
            let delta =
                compute_target_rotation_with_rng(0.0, &prizes, winner, &config, &mut rng).unwrap();
            assert!(delta >= MIN_SPINS as f64 * 360.0);
            assert!(delta < (MAX_SPINS + 1) as f64 * 360.0);
        }
    }

    #[test]
    fn test_rotation_is_monotonic() {
        let prizes = catalog();
        let mut rng = StdRng::seed_from_u64(5);
        let mut rotation = 0.0;

        for _ in 0..500 {
            let winner = draw_with_rng(&prizes, &mut rng).unwrap();
            let next = compute_target_rotation_with_rng(
                rotation,
                &prizes,
                &winner,
                &SpinConfig::default(),
                &mut rng,
            )
            .unwrap();
            assert!(next > rotation + 720.0);
            rotation = next;
        }
    }

    #[test]
    fn test_rotation_rejects_unknown_winner() {
        let prizes = catalog();
        let stranger = Prize::new(42, "Xe Máy", 1.0);
        let err = compute_target_rotation(0.0, &prizes, &stranger).unwrap_err();
        assert!(matches!(err, WheelError::InvalidArgument(_)));
    }

    #[test]
    fn test_rotation_finds_winner_by_id() {
        let prizes = catalog();
        let recolored = prizes[2].clone().with_colors("#000000", "#000000");
        let mut rng = StdRng::seed_from_u64(12);
        let target = compute_target_rotation_with_rng(
            0.0,
            &prizes,
            &recolored,
            &SpinConfig::default(),
            &mut rng,
        )
        .unwrap();
        assert_eq!(pointer_slot(target, prizes.len()), 2);
    }

    #[test]
    fn test_rotation_rejects_empty_set() {
        let winner = Prize::new(1, "Voucher 50K", 20.0);
        let err = compute_target_rotation(0.0, &[], &winner).unwrap_err();
        assert!(matches!(err, WheelError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_rotation_rejects_non_finite_start() {
        let prizes = catalog();
        let err = compute_target_rotation(f64::INFINITY, &prizes, &prizes[0]).unwrap_err();
        assert!(matches!(err, WheelError::InvalidArgument(_)));
    }

    #[test]
    fn test_narrow_slices_stop_at_center() {
        let prizes: Vec<Prize> = (0..90).map(|i| Prize::new(i, format!("P{}", i), 1.0)).collect();
        let mut rng = StdRng::seed_from_u64(8);
        let winner = prizes[17].clone();
        let delta = compute_target_rotation_with_rng(
            0.0,
            &prizes,
            &winner,
            &SpinConfig::default(),
            &mut rng,
        )
        .unwrap();
        let stop = 360.0 - delta.rem_euclid(360.0);
        assert!((stop - slice_center_angle(17, 90)).abs() < 1e-9);
    }

    #[test]
    fn test_spin_config_validation() {
        assert!(SpinConfig::default().validate().is_ok());

        let too_few = SpinConfig { min_extra_spins: 1, ..SpinConfig::default() };
        assert!(matches!(too_few.validate(), Err(WheelError::InvalidConfiguration(_))));

        let inverted = SpinConfig { min_extra_spins: 8, max_extra_spins: 7, ..SpinConfig::default() };
        assert!(matches!(inverted.validate(), Err(WheelError::InvalidConfiguration(_))));

        let negative_margin = SpinConfig { edge_margin_degrees: -1.0, ..SpinConfig::default() };
        assert!(matches!(negative_margin.validate(), Err(WheelError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_spin_config_from_json() {
        let config = SpinConfig::from_json(r#"{"min_extra_spins": 3, "max_extra_spins": 4}"#).unwrap();
        assert_eq!(config.min_extra_spins, 3);
        assert_eq!(config.spin_duration_ms, SPIN_DURATION_MS);

        assert!(matches!(
            SpinConfig::from_json(r#"{"min_extra_spins": 10}"#),
            Err(WheelError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_pointer_slot() {
        assert_eq!(pointer_slot(0.0, 8), 0);
        // Turning clockwise by 50 degrees brings the slot ending at 360 under the pointer.
        assert_eq!(pointer_slot(50.0, 8), 6);
        assert_eq!(pointer_slot(360.0 * 7.0 - 10.0, 8), 0);
        assert_eq!(pointer_slot(-100.0, 8), 2);
    }

    #[test]
    fn test_wheel_game_guards_concurrent_spins() {
        let prizes = catalog();
        let mut rng = StdRng::seed_from_u64(21);
        let mut game = WheelGame::new();

        let first = game.start_spin(&prizes, &mut rng).unwrap();
        assert!(game.is_spinning);
        assert_eq!(game.rotation, first.target_rotation_degrees);

        let err = game.start_spin(&prizes, &mut rng).unwrap_err();
        assert_eq!(err, WheelError::SpinInProgress);
        assert_eq!(game.rotation, first.target_rotation_degrees);

        let won = game.complete_spin().unwrap();
        assert_eq!(won, first.prize);
        assert!(!game.is_spinning);
        assert!(game.complete_spin().is_none());

        let second = game.start_spin(&prizes, &mut rng).unwrap();
        assert!(second.target_rotation_degrees > first.target_rotation_degrees);
        assert_eq!(pointer_slot(second.target_rotation_degrees, prizes.len()), second.slot_index);
    }

    #[test]
    fn test_wheel_game_keeps_state_on_failed_spin() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut game = WheelGame::new();
        assert!(game.start_spin(&[], &mut rng).is_err());
        assert!(!game.is_spinning);
        assert_eq!(game.rotation, 0.0);
    }
}
