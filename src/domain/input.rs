// Key sampling and per-fighter control bindings.

use std::collections::HashSet;
use std::fmt;

/// Construction-time binding failures. A key may serve exactly one action,
/// and the two fighters may never share a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    DuplicateKey(String),
    SharedKey(String),
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingError::DuplicateKey(key) => {
                write!(f, "key {key:?} is bound to more than one action")
            }
            BindingError::SharedKey(key) => {
                write!(f, "key {key:?} is bound by both fighters")
            }
        }
    }
}

impl std::error::Error for BindingError {}

/// Mapping from logical action to the key identity that triggers it.
#[derive(Debug, Clone)]
pub struct ControlBindings {
    pub left: String,
    pub right: String,
    pub jump: String,
    pub attack: String,
    pub special: String,
    pub ultimate: String,
    pub block: String,
}

impl ControlBindings {
    /// Default left-side layout: WASD movement plus f/g/h abilities.
    pub fn left_side_default() -> Self {
        Self {
            left: "a".to_string(),
            right: "d".to_string(),
            jump: "w".to_string(),
            attack: "f".to_string(),
            special: "g".to_string(),
            ultimate: "h".to_string(),
            block: "s".to_string(),
        }
    }

    /// Default right-side layout: arrow-key movement plus k/l/; abilities.
    pub fn right_side_default() -> Self {
        Self {
            left: "ArrowLeft".to_string(),
            right: "ArrowRight".to_string(),
            jump: "ArrowUp".to_string(),
            attack: "k".to_string(),
            special: "l".to_string(),
            ultimate: ";".to_string(),
            block: "ArrowDown".to_string(),
        }
    }

    fn keys(&self) -> [&str; 7] {
        [
            &self.left,
            &self.right,
            &self.jump,
            &self.attack,
            &self.special,
            &self.ultimate,
            &self.block,
        ]
    }

    /// Rejects bindings that reuse a key for two actions.
    pub fn validate(&self) -> Result<(), BindingError> {
        let keys = self.keys();
        for (i, key) in keys.iter().enumerate() {
            if keys[i + 1..].contains(key) {
                return Err(BindingError::DuplicateKey(key.to_string()));
            }
        }
        Ok(())
    }

    /// Rejects two binding sets that claim the same key.
    pub fn ensure_disjoint(a: &Self, b: &Self) -> Result<(), BindingError> {
        let taken = b.keys();
        for key in a.keys() {
            if taken.contains(&key) {
                return Err(BindingError::SharedKey(key.to_string()));
            }
        }
        Ok(())
    }
}

/// One fighter's sampled inputs for a single tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputFrame {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub attack: bool,
    pub special: bool,
    pub ultimate: bool,
    pub block: bool,
}

/// Boolean held-state table fed by raw key-down/key-up events. No edge
/// detection; repeated-trigger gating lives in the cooldown timers.
#[derive(Debug, Default)]
pub struct KeySampler {
    held: HashSet<String>,
}

impl KeySampler {
    pub fn press(&mut self, key: &str) {
        self.held.insert(key.to_string());
    }

    pub fn release(&mut self, key: &str) {
        self.held.remove(key);
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    /// Reads the table through one fighter's bindings.
    pub fn sample(&self, controls: &ControlBindings) -> InputFrame {
        InputFrame {
            left: self.is_held(&controls.left),
            right: self.is_held(&controls.right),
            jump: self.is_held(&controls.jump),
            attack: self.is_held(&controls.attack),
            special: self.is_held(&controls.special),
            ultimate: self.is_held(&controls.ultimate),
            block: self.is_held(&controls.block),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_a_key_is_pressed_then_it_samples_held_until_released() {
        let mut sampler = KeySampler::default();
        let controls = ControlBindings::left_side_default();

        sampler.press("a");
        assert!(sampler.sample(&controls).left);

        sampler.release("a");
        assert!(!sampler.sample(&controls).left);
    }

    #[test]
    fn when_a_key_is_pressed_twice_then_one_release_clears_it() {
        let mut sampler = KeySampler::default();
        sampler.press("f");
        sampler.press("f");
        sampler.release("f");
        assert!(!sampler.is_held("f"));
    }

    #[test]
    fn when_sampling_then_only_bound_keys_are_consulted() {
        let mut sampler = KeySampler::default();
        sampler.press("ArrowLeft");

        let left_side = sampler.sample(&ControlBindings::left_side_default());
        let right_side = sampler.sample(&ControlBindings::right_side_default());
        assert!(!left_side.left);
        assert!(right_side.left);
    }

    #[test]
    fn when_default_layouts_are_checked_then_they_are_valid_and_disjoint() {
        let p1 = ControlBindings::left_side_default();
        let p2 = ControlBindings::right_side_default();
        assert_eq!(p1.validate(), Ok(()));
        assert_eq!(p2.validate(), Ok(()));
        assert_eq!(ControlBindings::ensure_disjoint(&p1, &p2), Ok(()));
    }

    #[test]
    fn when_a_key_serves_two_actions_then_validate_rejects_it() {
        let mut controls = ControlBindings::left_side_default();
        controls.block = controls.attack.clone();
        assert_eq!(
            controls.validate(),
            Err(BindingError::DuplicateKey("f".to_string()))
        );
    }

    #[test]
    fn when_both_fighters_claim_a_key_then_disjoint_check_rejects_it() {
        let p1 = ControlBindings::left_side_default();
        let mut p2 = ControlBindings::right_side_default();
        p2.ultimate = "g".to_string();
        assert_eq!(
            ControlBindings::ensure_disjoint(&p1, &p2),
            Err(BindingError::SharedKey("g".to_string()))
        );
    }
}
