use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Corporate tax (IS)
// ---------------------------------------------------------------------------

#[napi]
pub fn compare_tax_regimes(input_json: String) -> NapiResult<String> {
    let input: scop_finance_core::tax::corporate::TaxComparisonInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = scop_finance_core::tax::corporate::compare_tax_regimes(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Vendor-loan financing
// ---------------------------------------------------------------------------

#[napi]
pub fn build_amortization_schedule(input_json: String) -> NapiResult<String> {
    let input: scop_finance_core::financing::vendor_loan::VendorLoanInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = scop_finance_core::financing::vendor_loan::build_amortization_schedule(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn financing_structure(input_json: String) -> NapiResult<String> {
    let input: scop_finance_core::financing::structure::FinancingStructureInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = scop_finance_core::financing::structure::financing_structure(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
