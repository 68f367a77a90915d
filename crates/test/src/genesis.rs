use serde::{Deserialize, Serialize};

use polybft_core_types::{Height, ValidatorMetadata};

use crate::TestContext;

/// The initial height of the chain and its validators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genesis {
    pub initial_height: Height,
    pub validators: Vec<ValidatorMetadata<TestContext>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator;

    #[test]
    fn json() {
        let genesis = Genesis {
            initial_height: Height::new(1),
            validators: vec![validator(1, 10)],
        };

        let json = serde_json::to_value(&genesis).unwrap();

        assert_eq!(json["initial_height"], 1);
        assert_eq!(json["validators"][0]["voting_power"], 10);
        assert_eq!(
            json["validators"][0]["address"],
            "0100000000000000000000000000000000000000"
        );

        let parsed: Genesis = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, genesis);
    }
}
