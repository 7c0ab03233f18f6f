//! Ordered compartment trajectories.
//!
//! A [`Trajectory`] is what a model hands back from `dump()`: one named
//! series per compartment, kept in declaration order so renderers can
//! emit columns without re-sorting.

use crate::numeric::Real;

/// Full history of a single compartment.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub values: Vec<Real>,
}

/// Compartment histories in declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    series: Vec<Series>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a compartment. Order of calls is the key order.
    pub fn with_series(mut self, name: &'static str, values: &[Real]) -> Self {
        debug_assert!(
            self.series.is_empty() || self.len() == values.len(),
            "series lengths must agree"
        );
        self.series.push(Series {
            name,
            values: values.to_vec(),
        });
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.series.iter().map(|s| s.name)
    }

    pub fn get(&self, name: &str) -> Option<&[Real]> {
        self.series
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.values.as_slice())
    }

    pub fn series(&self) -> impl Iterator<Item = &Series> {
        self.series.iter()
    }

    /// Number of recorded points (shared by every series).
    pub fn len(&self) -> usize {
        self.series.first().map_or(0, |s| s.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values of every compartment at `index`, in key order.
    pub fn row(&self, index: usize) -> Option<Vec<Real>> {
        if index >= self.len() {
            return None;
        }
        Some(self.series.iter().map(|s| s.values[index]).collect())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Trajectory {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.series.len()))?;
        for s in &self.series {
            map.serialize_entry(s.name, &s.values)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trajectory {
        Trajectory::new()
            .with_series("s", &[0.9, 0.8])
            .with_series("i", &[0.1, 0.15])
            .with_series("r", &[0.0, 0.05])
    }

    #[test]
    fn keys_keep_declaration_order() {
        let keys: Vec<_> = sample().keys().collect();
        assert_eq!(keys, vec!["s", "i", "r"]);
    }

    #[test]
    fn lookup_and_rows() {
        let traj = sample();
        assert_eq!(traj.len(), 2);
        assert!(!traj.is_empty());
        assert_eq!(traj.get("i"), Some(&[0.1, 0.15][..]));
        assert_eq!(traj.get("x"), None);
        assert_eq!(traj.row(1), Some(vec![0.8, 0.15, 0.05]));
        assert_eq!(traj.row(2), None);
    }

    #[test]
    fn empty_trajectory() {
        let traj = Trajectory::new();
        assert!(traj.is_empty());
        assert_eq!(traj.row(0), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_ordered_map() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, r#"{"s":[0.9,0.8],"i":[0.1,0.15],"r":[0.0,0.05]}"#);
    }
}
