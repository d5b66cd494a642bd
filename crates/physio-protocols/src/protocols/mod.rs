pub mod acl_rehab;
pub mod frozen_shoulder;
pub mod wrist_post_cast;
