pub mod asa;
pub mod basdai;
pub mod bvas_v3;
pub mod caprini;
pub mod das28_crp;
pub mod goldman;
pub mod rcri;
pub mod weighted;
