//! Test extension adding bank and feegrant messages the client is not built
//! with.

use txsigner_extension_sdk::prelude::*;

const MSG: &str = "cosmos.base.v1beta1.Msg";
const ALLOWANCE: &str = "cosmos.feegrant.v1beta1.FeeAllowanceI";

fn bank_amino(amino: &mut LegacyAmino<'_>) -> Result<(), RegistrationError> {
    amino.register_concrete("/cosmos.bank.v1beta1.MsgBurn", "cosmos-sdk/MsgBurn")?;
    amino.register_concrete("/cosmos.bank.v1beta1.MsgSetSendEnabled", "cosmos-sdk/MsgSetSendEnabled")
}

fn bank_interfaces(registry: &mut Interfaces<'_>) -> Result<(), RegistrationError> {
    registry.register_implementations(
        MSG,
        &[
            "/cosmos.bank.v1beta1.MsgBurn",
            "/cosmos.bank.v1beta1.MsgSetSendEnabled",
        ],
    )
}

fn feegrant_amino(amino: &mut LegacyAmino<'_>) -> Result<(), RegistrationError> {
    amino.register_concrete("/cosmos.feegrant.v1beta1.MsgGrantAllowance", "cosmos-sdk/MsgGrantAllowance")?;
    amino.register_concrete("/cosmos.feegrant.v1beta1.BasicAllowance", "cosmos-sdk/BasicAllowance")
}

fn feegrant_interfaces(registry: &mut Interfaces<'_>) -> Result<(), RegistrationError> {
    registry.register_interface(ALLOWANCE)?;
    registry.register_implementation(ALLOWANCE, "/cosmos.feegrant.v1beta1.BasicAllowance")?;
    registry.register_implementation(MSG, "/cosmos.feegrant.v1beta1.MsgGrantAllowance")
}

export_abi_version!();

export_registrations! {
    symbol: Cosmos_bank_v1beta1,
    legacy_amino: bank_amino,
    interfaces: bank_interfaces,
}

export_registrations! {
    symbol: Cosmos_feegrant_v1beta1,
    legacy_amino: feegrant_amino,
    interfaces: feegrant_interfaces,
}
