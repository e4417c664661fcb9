#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Width(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Length(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Height(pub usize);

/// How many cells apart two junctions are along either axis.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Step(pub usize);

pub const JUNCTION_STEP: Step = Step(2);
