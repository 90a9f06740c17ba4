/// Joints the grounding layer is allowed to read and override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JointId {
    Pelvis,
    LeftFoot,
    RightFoot,
}

impl JointId {
    pub const ALL: [JointId; 3] = [JointId::Pelvis, JointId::LeftFoot, JointId::RightFoot];

    pub(crate) fn index(self) -> usize {
        match self {
            JointId::Pelvis => 0,
            JointId::LeftFoot => 1,
            JointId::RightFoot => 2,
        }
    }
}

/// Foot selector, for state that exists once per foot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Foot {
    Left,
    Right,
}

impl Foot {
    pub const BOTH: [Foot; 2] = [Foot::Left, Foot::Right];

    pub fn joint(self) -> JointId {
        match self {
            Foot::Left => JointId::LeftFoot,
            Foot::Right => JointId::RightFoot,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Foot::Left => 0,
            Foot::Right => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foot_maps_to_its_joint() {
        assert_eq!(Foot::Left.joint(), JointId::LeftFoot);
        assert_eq!(Foot::Right.joint(), JointId::RightFoot);
    }

    #[test]
    fn joint_indices_are_distinct() {
        let mut seen = [false; 3];
        for joint in JointId::ALL {
            assert!(!seen[joint.index()]);
            seen[joint.index()] = true;
        }
    }
}
