/// Unit `1px`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CssPx;

pub type Length<U> = euclid::Length<f32, U>;
