// ============================================================
// Error messages
//
// Every failure aborts the transaction with user-error status 4.
// Messages carry the failure kind before the colon and a
// human-readable reason after it.
// ============================================================

pub const ERR_UNAUTHORIZED: &str = "Unauthorized: caller lacks the required role";
pub const ERR_RENOUNCE_FOR_OTHER: &str = "Unauthorized: can only renounce roles for self";
pub const ERR_CAP_EXCEEDED: &str = "CapExceeded: mint would exceed the supply cap";
pub const ERR_INSUFFICIENT_BALANCE: &str = "InsufficientBalance: amount exceeds balance";
pub const ERR_INSUFFICIENT_ALLOWANCE: &str = "InsufficientAllowance: amount exceeds allowance";
pub const ERR_MINT_NOT_ALLOWLISTED: &str = "NotAllowlisted: recipient not allowlisted";
pub const ERR_TRANSFER_NOT_ALLOWLISTED: &str = "NotAllowlisted: transfer parties not allowlisted";
pub const ERR_BURN_NOT_ALLOWLISTED: &str = "NotAllowlisted: burner not allowlisted";
pub const ERR_INVALID_RECIPIENT: &str = "InvalidRecipient: zero address not allowed";
pub const ERR_INVALID_SIGNATURE: &str = "InvalidSignature: signature does not identify a signer";
pub const ERR_EXPIRED: &str = "Expired: signature expired";
pub const ERR_INVALID_NONCE: &str = "InvalidNonce: nonce does not match signer nonce";
pub const ERR_INVALID_QUERY_POINT: &str = "InvalidQueryPoint: block not yet determined";
pub const ERR_CHECKPOINT_OUT_OF_RANGE: &str = "InvalidQueryPoint: checkpoint index out of range";
pub const ERR_NOTHING_TO_WITHDRAW: &str = "NothingToWithdraw: contract holds none of this token";
pub const ERR_VOTE_UNDERFLOW: &str = "ArithmeticOverflow: vote total would go negative";
pub const ERR_NONCE_OVERFLOW: &str = "ArithmeticOverflow: signature nonce overflow";
