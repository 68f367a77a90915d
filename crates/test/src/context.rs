use polybft_core_types::Context;

use crate::{Address, PublicKey};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TestContext;

impl Context for TestContext {
    type Address = Address;
    type PublicKey = PublicKey;
}
