//! Voxel world renderers that execute region paint operations.
//!
//! The maze generators never talk to a world directly. They record operations which are
//! flushed, in order, to one of these once generation has finished.

use error_chain::bail;
use log::trace;
use std::io::Write;

use crate::errors::*;
use crate::paint::{Coord3D, Material, RegionPaintOp};

pub trait VoxelRenderer {
    /// Fill the axis aligned box between two opposite corners, inclusive, with `material`.
    fn fill_region(&mut self, corner_a: Coord3D, corner_b: Coord3D, material: &Material) -> Result<()>;
}

/// Apply `ops` to `renderer` in the order given, stopping at the first failure.
///
/// Later operations overwrite earlier ones where their boxes overlap, which is how
/// passages get carved out of a solid block.
pub fn flush<V: VoxelRenderer + ?Sized>(ops: &[RegionPaintOp], renderer: &mut V) -> Result<()> {
    for (index, op) in ops.iter().enumerate() {
        trace!("op {}: fill {} to {} with {}", index, op.from, op.to, op.material);
        renderer.fill_region(op.from, op.to, &op.material)?;
    }
    Ok(())
}

/// Keeps every operation it is sent.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    pub ops: Vec<RegionPaintOp>,
}

impl RecordingRenderer {
    pub fn new() -> RecordingRenderer {
        RecordingRenderer::default()
    }
}

impl VoxelRenderer for RecordingRenderer {
    fn fill_region(&mut self, corner_a: Coord3D, corner_b: Coord3D, material: &Material) -> Result<()> {
        self.ops.push(RegionPaintOp {
            from: corner_a,
            to: corner_b,
            material: material.clone(),
        });
        Ok(())
    }
}

/// Writes one `fill x1 y1 z1 x2 y2 z2 block` command per operation, a script that a
/// block game server console can replay.
#[derive(Debug)]
pub struct CommandScriptRenderer<W: Write> {
    out: W,
    commands_written: usize,
}

impl<W: Write> CommandScriptRenderer<W> {
    pub fn new(out: W) -> CommandScriptRenderer<W> {
        CommandScriptRenderer { out, commands_written: 0 }
    }

    pub fn commands_written(&self) -> usize {
        self.commands_written
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn check_block_name(name: &str) -> Result<()> {
    let well_formed = !name.is_empty() &&
                      name.chars().all(|c| c.is_ascii_alphanumeric() || "_:-.".contains(c));
    if well_formed {
        Ok(())
    } else {
        bail!(ErrorKind::InvalidMaterial(name.to_owned()))
    }
}

impl<W: Write> VoxelRenderer for CommandScriptRenderer<W> {
    fn fill_region(&mut self, corner_a: Coord3D, corner_b: Coord3D, material: &Material) -> Result<()> {
        if let Material::Block(ref name) = *material {
            check_block_name(name)?;
        }
        writeln!(self.out, "fill {} {} {}", corner_a, corner_b, material)?;
        self.commands_written += 1;
        Ok(())
    }
}

/// A dense box of voxels in memory, for looking at what a series of operations leaves behind.
///
/// Blocks outside the box are ignored. Unpainted blocks read as None.
#[derive(Debug, Clone)]
pub struct VoxelVolume {
    min: Coord3D,
    size: (usize, usize, usize),
    blocks: Vec<Option<Material>>,
}

impl VoxelVolume {
    /// A volume covering `min` up to and including `max`.
    pub fn new(min: Coord3D, max: Coord3D) -> VoxelVolume {
        let extent = |lo: i64, hi: i64| if hi < lo { 0 } else { (hi - lo + 1) as usize };
        let size = (extent(min.x, max.x), extent(min.y, max.y), extent(min.z, max.z));
        VoxelVolume {
            min,
            size,
            blocks: vec![None; size.0 * size.1 * size.2],
        }
    }

    fn index(&self, at: Coord3D) -> Option<usize> {
        let (x, y, z) = (at.x - self.min.x, at.y - self.min.y, at.z - self.min.z);
        if x < 0 || y < 0 || z < 0 {
            return None;
        }
        let (x, y, z) = (x as usize, y as usize, z as usize);
        if x < self.size.0 && y < self.size.1 && z < self.size.2 {
            Some((y * self.size.2 + z) * self.size.0 + x)
        } else {
            None
        }
    }

    pub fn get(&self, at: Coord3D) -> Option<&Material> {
        self.index(at).and_then(|i| self.blocks[i].as_ref())
    }

    /// Is there a solid block at `at`?
    pub fn is_solid(&self, at: Coord3D) -> bool {
        match self.get(at) {
            Some(Material::Block(_)) => true,
            _ => false,
        }
    }
}

impl VoxelRenderer for VoxelVolume {
    fn fill_region(&mut self, corner_a: Coord3D, corner_b: Coord3D, material: &Material) -> Result<()> {
        let (lo, hi) = (
            Coord3D::new(corner_a.x.min(corner_b.x), corner_a.y.min(corner_b.y), corner_a.z.min(corner_b.z)),
            Coord3D::new(corner_a.x.max(corner_b.x), corner_a.y.max(corner_b.y), corner_a.z.max(corner_b.z)),
        );
        for y in lo.y..=hi.y {
            for z in lo.z..=hi.z {
                for x in lo.x..=hi.x {
                    if let Some(i) = self.index(Coord3D::new(x, y, z)) {
                        self.blocks[i] = Some(material.clone());
                    }
                }
            }
        }
        Ok(())
    }
}
