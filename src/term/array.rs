//! Array terms: named N-dimensional (1-3) sensory grids, used by the (external)
//! vision harness. The core only needs to parse, canonicalise, and print these;
//! no array algebra is implemented (spec §1 Non-goals).

/// A single float index coordinate, required to lie in `[-1, 1]`.
pub type ArrayCoordinate = f32;

/// An array term: either the array itself (`@name`) or one of its indexed
/// elements (`@name[idx1,idx2,idx3]`).
#[derive(Debug, Clone)]
pub struct ArrayTerm {
    name: String,
    dimensions: u8,
    index: Option<Vec<ArrayCoordinate>>,
}

impl ArrayTerm {
    /// The whole array, named `name`, with the given dimensionality (1-3).
    pub fn whole(name: impl Into<String>, dimensions: u8) -> Self {
        Self {
            name: name.into(),
            dimensions,
            index: None,
        }
    }

    /// A single indexed element of the array.
    pub fn element(name: impl Into<String>, index: Vec<ArrayCoordinate>) -> Self {
        let dimensions = index.len() as u8;
        Self {
            name: name.into(),
            dimensions,
            index: Some(index),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimensions(&self) -> u8 {
        self.dimensions
    }

    pub fn index(&self) -> Option<&[ArrayCoordinate]> {
        self.index.as_deref()
    }

    /// True iff the dimensionality is within the supported 1-3 range and any
    /// index coordinates lie in `[-1, 1]`.
    pub fn is_well_formed(&self) -> bool {
        if !(1..=3).contains(&self.dimensions) {
            return false;
        }
        match &self.index {
            None => true,
            Some(idx) => idx.len() == self.dimensions as usize && idx.iter().all(|c| (-1.0..=1.0).contains(c)),
        }
    }

    pub fn canonical_string(&self) -> String {
        match &self.index {
            None => format!("@{}", self.name),
            Some(idx) => {
                let coords = idx
                    .iter()
                    .map(|c| format!("{c}"))
                    .collect::<Vec<_>>()
                    .join(",");
                format!("@{}[{}]", self.name, coords)
            }
        }
    }
}
