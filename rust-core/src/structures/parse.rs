// Readers for the structure data file and the cluster definition file

use std::path::Path;

use anyhow::{anyhow, bail, Context};
use nalgebra::Vector3;
use serde::Deserialize;

use crate::clusters::cluster::Cluster;
use crate::interfaces::TermType;
use crate::structures::structure::{Atom, Structure};

/// Parse a structure data file.
///
/// Each block looks like
///
/// ```text
/// # Fe Ni
/// 2 2 fcc_0001 -32.4 3.6 3.6 3.6 90 90 90
/// 3.6 0.0 0.0
/// 0.0 3.6 0.0
/// 0.0 0.0 3.6
/// 1 Fe 2.1 0.0 0.0 0.0
/// ...
/// ```
///
/// The header names the species, the metadata line gives the per-species atom counts, the
/// structure name, its total energy and lattice constants/angles, followed by three lattice
/// vectors and one line per atom (`index type spin x y z`, direct coordinates). Species are
/// assigned in header order, repeated by the per-species counts.
pub fn parse_structures_str(text: &str) -> anyhow::Result<Vec<Structure>> {
    let lines: Vec<&str> = text.lines().collect();
    let mut structures = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        if !lines[i].trim_start().starts_with('#') {
            i += 1;
            continue;
        }
        let (structure, consumed) =
            parse_block(&lines, i).with_context(|| format!("structure block at line {}", i + 1))?;
        structures.push(structure);
        i += consumed;
    }
    Ok(structures)
}

pub fn parse_structures(path: impl AsRef<Path>) -> anyhow::Result<Vec<Structure>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading structure file {}", path.display()))?;
    parse_structures_str(&text).with_context(|| format!("in {}", path.display()))
}

fn line_at<'a>(lines: &[&'a str], index: usize) -> anyhow::Result<&'a str> {
    lines
        .get(index)
        .copied()
        .ok_or_else(|| anyhow!("unexpected end of input at line {}", index + 1))
}

fn parse_floats(line: &str, line_no: usize) -> anyhow::Result<Vec<f64>> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .with_context(|| format!("line {line_no}: invalid number {token:?}"))
        })
        .collect()
}

fn parse_block(lines: &[&str], start: usize) -> anyhow::Result<(Structure, usize)> {
    let species_names: Vec<&str> = lines[start].split_whitespace().skip(1).collect();
    if species_names.is_empty() {
        bail!("line {}: header names no species", start + 1);
    }
    let n_species = species_names.len();

    let meta_no = start + 2;
    let meta: Vec<&str> = line_at(lines, start + 1)?.split_whitespace().collect();
    if meta.len() < n_species + 2 {
        bail!("line {meta_no}: expected {n_species} atom counts, a name and an energy");
    }
    let counts = meta[..n_species]
        .iter()
        .map(|token| {
            token
                .parse::<usize>()
                .with_context(|| format!("line {meta_no}: invalid atom count {token:?}"))
        })
        .collect::<anyhow::Result<Vec<usize>>>()?;
    let name = meta[n_species].to_string();
    let total_energy = meta[n_species + 1]
        .parse::<f64>()
        .with_context(|| format!("line {meta_no}: invalid energy {:?}", meta[n_species + 1]))?;
    let atom_sum: usize = counts.iter().sum();
    if atom_sum == 0 {
        bail!("line {meta_no}: structure {name} has no atoms");
    }

    let mut lattice_rows = [[0.0; 3]; 3];
    for (k, row) in lattice_rows.iter_mut().enumerate() {
        let line_no = start + 3 + k;
        let values = parse_floats(line_at(lines, start + 2 + k)?, line_no)?;
        if values.len() < 3 {
            bail!("line {line_no}: lattice vector needs 3 components");
        }
        row.copy_from_slice(&values[..3]);
    }

    let species = species_names
        .iter()
        .zip(counts.iter())
        .flat_map(|(name, &count)| std::iter::repeat(*name).take(count));

    let mut atoms = Vec::with_capacity(atom_sum);
    for (j, label) in species.enumerate() {
        let line_no = start + 6 + j;
        let tokens: Vec<&str> = line_at(lines, start + 5 + j)?.split_whitespace().collect();
        if tokens.len() < 6 {
            bail!("line {line_no}: atom line needs index, type, spin and 3 coordinates");
        }
        let spin = tokens[2]
            .parse::<f64>()
            .with_context(|| format!("line {line_no}: invalid spin {:?}", tokens[2]))?;
        let coords = parse_floats(&tokens[3..6].join(" "), line_no)?;
        atoms.push(Atom::new(
            Vector3::new(coords[0], coords[1], coords[2]),
            label,
            Some(spin),
        ));
    }

    let structure = Structure::new(name, lattice_rows, atoms)?
        .with_energy_per_atom(total_energy / atom_sum as f64);
    Ok((structure, 5 + atom_sum))
}

/// One entry of the cluster file: `[sites, scale_refs, [term_type]]`.
#[derive(Debug, Deserialize)]
struct RawCluster(Vec<[f64; 3]>, Vec<f64>, Vec<u8>);

#[derive(Debug, Deserialize)]
struct ClusterFile {
    #[serde(rename = "List")]
    list: Vec<RawCluster>,
}

/// Parse a cluster definition file: `{"List": [[[[x, y, z], ...], [d, ...], [term]], ...]}`.
pub fn parse_clusters_str(text: &str) -> anyhow::Result<Vec<Cluster>> {
    let file: ClusterFile = serde_json::from_str(text).context("parsing cluster definitions")?;
    file.list
        .into_iter()
        .enumerate()
        .map(|(index, RawCluster(sites, scale_refs, term))| {
            let flag = term.first().copied().unwrap_or(0);
            let term_type = TermType::try_from(flag)
                .with_context(|| format!("cluster #{}", index + 1))?;
            Cluster::new(
                sites.into_iter().map(Vector3::from).collect(),
                scale_refs,
                term_type,
            )
            .with_context(|| format!("cluster #{}", index + 1))
        })
        .collect()
}

pub fn parse_clusters(path: impl AsRef<Path>) -> anyhow::Result<Vec<Cluster>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading cluster file {}", path.display()))?;
    parse_clusters_str(&text).with_context(|| format!("in {}", path.display()))
}
