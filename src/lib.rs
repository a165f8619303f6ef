#![no_std]

multiversx_sc::imports!();

pub mod basic_dao_proxy;
pub mod types;

use types::Proposal;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait BasicDao {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// The deployer becomes the owner; the membership fee is fixed
    /// for the contract's lifetime.
    #[init]
    fn init(&self, membership_fee: BigUint) {
        let caller = self.blockchain().get_caller();
        self.owner().set(&caller);
        self.membership_fee().set(&membership_fee);
        self.proposal_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: joinDao
    // Admission requires the exact fee — not more, not less.
    // The payment stays in the contract balance as custody.
    // ========================================================

    #[endpoint(joinDao)]
    #[payable("EGLD")]
    fn join_dao(&self) {
        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();

        require!(
            payment_amount == self.membership_fee().get(),
            "Incorrect membership fee"
        );
        require!(!self.members().contains(&caller), "Already a member");

        self.members().insert(caller.clone());

        self.membership_changed_event(&caller);
    }

    // ========================================================
    // ENDPOINT: createProposal
    // Any member can propose. Ids are sequential from 0 and
    // never reused.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(&self, description: ManagedBuffer, deadline: u64) -> u64 {
        let caller = self.blockchain().get_caller();
        require!(
            self.members().contains(&caller),
            "Only members can create proposals"
        );

        let now = self.blockchain().get_block_timestamp();
        require!(deadline > now, "Deadline must be in the future");

        let proposal_id = self.proposal_count().get();

        let proposal = Proposal {
            description: description.clone(),
            deadline,
            votes_for: 0u64,
            votes_against: 0u64,
            executed: false,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id + 1u64);

        self.proposal_created_event(proposal_id, &description, deadline);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // One vote per member per proposal, strictly before the
    // deadline.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, support: bool) {
        let caller = self.blockchain().get_caller();
        require!(
            proposal_id < self.proposal_count().get(),
            "Proposal does not exist"
        );
        require!(self.members().contains(&caller), "Only members can vote");

        let mut proposal = self.proposals(proposal_id).get();

        let now = self.blockchain().get_block_timestamp();
        require!(now < proposal.deadline, "Voting period has ended");
        require!(
            !self.has_voted(proposal_id, &caller).get(),
            "You have already voted on this proposal"
        );

        if support {
            proposal.votes_for += 1;
        } else {
            proposal.votes_against += 1;
        }

        self.has_voted(proposal_id, &caller).set(true);
        self.proposals(proposal_id).set(&proposal);

        self.voted_event(&caller, proposal_id, support);
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // Owner-only finalization after the voting window closes.
    // A strict majority of cast votes passes; ties fail. No
    // funds move — execution only records the outcome.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), "Not the contract owner");
        require!(
            proposal_id < self.proposal_count().get(),
            "Proposal does not exist"
        );

        let mut proposal = self.proposals(proposal_id).get();
        require!(!proposal.executed, "Proposal already executed");

        let now = self.blockchain().get_block_timestamp();
        require!(now >= proposal.deadline, "Voting period has not ended");

        proposal.executed = true;
        let passed = proposal.votes_for > proposal.votes_against;
        self.proposals(proposal_id).set(&proposal);

        self.proposal_executed_event(proposal_id, passed);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getMembershipFee)]
    fn get_membership_fee(&self) -> BigUint {
        self.membership_fee().get()
    }

    #[view(isMember)]
    fn is_member(&self, address: &ManagedAddress) -> bool {
        self.members().contains(address)
    }

    #[view(getMembers)]
    fn get_members(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for member in self.members().iter() {
            result.push(member);
        }
        result
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            proposal_id < self.proposal_count().get(),
            "Proposal does not exist"
        );
        self.proposals(proposal_id).get()
    }

    #[view(getProposals)]
    fn get_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        for i in 0..total {
            result.push(self.proposals(i).get());
        }
        result
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.proposal_count().get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("membershipChanged")]
    fn membership_changed_event(&self, #[indexed] member: &ManagedAddress);

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] description: &ManagedBuffer,
        deadline: u64,
    );

    #[event("voted")]
    fn voted_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        #[indexed] proposal_id: u64,
        support: bool,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(&self, #[indexed] proposal_id: u64, passed: bool);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("membershipFee")]
    fn membership_fee(&self) -> SingleValueMapper<BigUint>;

    // ── Membership ──

    // SetMapper iterates in insertion order, which getMembers relies on.
    #[storage_mapper("members")]
    fn members(&self) -> SetMapper<ManagedAddress>;

    // ── Proposals ──

    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;
}
