multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    /// Free-form text, immutable after creation.
    pub description: ManagedBuffer<M>,
    /// Voting cutoff, seconds since epoch. Voting is open strictly
    /// before this timestamp and closed at or after it.
    pub deadline: u64,
    pub votes_for: u64,
    pub votes_against: u64,
    /// Flips false -> true exactly once, via executeProposal.
    pub executed: bool,
}
