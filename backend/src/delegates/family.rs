use crate::{
    layouts::{Boolean, CiphertextFamily, EngineResult, Uint8},
    oep::{BooleanEngine, IntegerEngine},
};

impl<B> CiphertextFamily<B> for Boolean
where
    B: BooleanEngine,
{
    const NAME: &'static str = "boolean";

    type Ciphertext = B::BooleanCiphertext;

    fn serialize(ct: &Self::Ciphertext) -> EngineResult<Vec<u8>> {
        B::boolean_serialize(ct)
    }

    fn deserialize(bytes: &[u8]) -> EngineResult<Self::Ciphertext> {
        B::boolean_deserialize(bytes)
    }
}

impl<B> CiphertextFamily<B> for Uint8
where
    B: IntegerEngine,
{
    const NAME: &'static str = "uint8";

    type Ciphertext = B::IntegerCiphertext;

    fn serialize(ct: &Self::Ciphertext) -> EngineResult<Vec<u8>> {
        B::uint8_serialize(ct)
    }

    fn deserialize(bytes: &[u8]) -> EngineResult<Self::Ciphertext> {
        B::uint8_deserialize(bytes)
    }
}
