//! Types the client is compiled with.

use super::Codec;

pub const MSG_INTERFACE: &str = "cosmos.base.v1beta1.Msg";
pub const PUBKEY_INTERFACE: &str = "cosmos.crypto.PubKey";

/// (interface, type URL, amino name)
pub const BUILTIN_TYPES: &[(&str, &str, &str)] = &[
    (MSG_INTERFACE, "/cosmos.bank.v1beta1.MsgSend", "cosmos-sdk/MsgSend"),
    (MSG_INTERFACE, "/cosmos.bank.v1beta1.MsgMultiSend", "cosmos-sdk/MsgMultiSend"),
    (PUBKEY_INTERFACE, "/cosmos.crypto.secp256k1.PubKey", "tendermint/PubKeySecp256k1"),
    (PUBKEY_INTERFACE, "/cosmos.crypto.ed25519.PubKey", "tendermint/PubKeyEd25519"),
    (
        PUBKEY_INTERFACE,
        "/cosmos.crypto.multisig.LegacyAminoPubKey",
        "tendermint/PubKeyMultisigThreshold",
    ),
];

pub(crate) fn register(codec: &mut Codec) {
    for (interface, type_url, amino_name) in BUILTIN_TYPES {
        let result = codec
            .amino
            .register_concrete(type_url, amino_name)
            .and_then(|_| codec.registry.register_implementation(interface, type_url));
        if let Err(e) = result {
            tracing::error!("Failed to register builtin type {}: {}", type_url, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::TypeResolver;

    #[test]
    fn test_all_builtins_resolve() {
        let codec = Codec::with_builtin_types();
        for (_, type_url, amino_name) in BUILTIN_TYPES {
            assert!(codec.resolve(type_url).is_ok(), "{}", type_url);
            assert_eq!(codec.amino.amino_name(type_url), Some(*amino_name));
        }
        assert_eq!(codec.registry.len(), BUILTIN_TYPES.len());
    }
}
