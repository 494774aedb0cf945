use nalgebra::Vector3;

use crate::structures::structure::Structure;

/// Nearest-atom lookup for cluster sites inside one structure.
///
/// Cartesian atom positions are computed once per structure. Distances are taken to the
/// nearest periodic image, so a site wrapped to one face of the cell still finds an atom
/// relaxed just across the opposite face.
#[derive(Debug)]
pub struct SiteMatcher<'a> {
    structure: &'a Structure,
    positions: Vec<Vector3<f64>>,
    threshold: f64,
}

impl<'a> SiteMatcher<'a> {
    pub fn new(structure: &'a Structure, threshold: f64) -> Self {
        Self {
            structure,
            positions: structure.cartesian_positions(),
            threshold,
        }
    }

    pub fn structure(&self) -> &'a Structure {
        self.structure
    }

    /// Cartesian atom positions, in atom order
    pub fn positions(&self) -> &[Vector3<f64>] {
        &self.positions
    }

    /// Index of the closest atom strictly within the threshold.
    pub fn match_site(&self, site: &Vector3<f64>) -> Option<usize> {
        let lattice = self.structure.lattice();
        let mut best: Option<(usize, f64)> = None;
        for (index, position) in self.positions.iter().enumerate() {
            let dist = lattice.minimum_image_distance(site, position);
            if dist < self.threshold && best.map_or(true, |(_, d)| dist < d) {
                best = Some((index, dist));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Atom indices for every site, or `None` if any site has no atom within the threshold.
    pub fn match_sites(&self, sites: &[Vector3<f64>]) -> Option<Vec<usize>> {
        sites.iter().map(|site| self.match_site(site)).collect()
    }
}
