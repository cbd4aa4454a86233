#![allow(dead_code)]

use litesvm::{LiteSVM, types::TransactionResult};
use solana_sdk::{
        account::Account as SolanaAccount, clock::Clock, instruction::{Instruction, InstructionError},
        pubkey::Pubkey, signer::{Signer, keypair::Keypair}, transaction::{Transaction, TransactionError}
};
use rps_game::{
    GlobalState, Round, RpsError, ID as RPS_GAME_PROGRAM_ID
};
use anchor_lang::{
    AccountDeserialize,
    AccountSerialize,
    Space,
};


pub const AIRDROP_AMOUNT:u64 = 10_000_000_000;

pub fn add_rps_game_program(litesvm:&mut LiteSVM){
    let binary_path = include_bytes!("../../../../target/deploy/rps_game.so");

    litesvm.add_program(RPS_GAME_PROGRAM_ID, binary_path);
}

pub fn create_global_state_account(
    svm: &mut LiteSVM,
    global_state_pubkey: Pubkey,
    global_state: GlobalState,
) {
    let mut data = Vec::with_capacity(8 + GlobalState::INIT_SPACE);

    // Serialize account
    global_state
        .try_serialize(&mut data)
        .expect("Could not serialize GlobalState");

    // Anchor checks the account is sized for the full struct
    data.resize(8 + GlobalState::INIT_SPACE, 0);

    let rent = svm.minimum_balance_for_rent_exemption(data.len());

    let account = SolanaAccount {
        lamports: rent,
        data,
        owner: RPS_GAME_PROGRAM_ID,
        executable: false,
        rent_epoch: 0,
    };

    svm.set_account(global_state_pubkey, account)
        .expect("Could not insert GlobalState account into SVM");
}

pub fn create_round_account(
    svm: &mut LiteSVM,
    round_pubkey: Pubkey,
    round: &Round,
) {
    let mut data = Vec::with_capacity(8 + Round::INIT_SPACE);

    // Anchor writes the discriminator + fields
    round
        .try_serialize(&mut data)
        .expect("Could not serialize Round");

    // Options serialize shorter than the space they were allocated with
    data.resize(8 + Round::INIT_SPACE, 0);

    let rent = svm.minimum_balance_for_rent_exemption(data.len());

    let account = SolanaAccount {
        lamports: rent,
        data,
        owner: RPS_GAME_PROGRAM_ID,
        executable: false,
        rent_epoch: 0,
    };

    svm.set_account(round_pubkey, account)
        .expect("Could not insert Round account into SVM");
}

pub fn create_vault_account(svm: &mut LiteSVM, vault_pubkey: Pubkey, escrowed: u64) {
    let rent = svm.minimum_balance_for_rent_exemption(0);

    let account = SolanaAccount {
        lamports: rent + escrowed,
        data: Vec::new(),
        owner: RPS_GAME_PROGRAM_ID,
        executable: false,
        rent_epoch: 0,
    };

    svm.set_account(vault_pubkey, account).expect("Could not add in vault account");
}

pub fn get_round(svm: &LiteSVM, round_pubkey: Pubkey) -> Round {
    let account = svm.get_account(&round_pubkey).expect("Round account does not exist");

    Round::try_deserialize(&mut account.data.as_slice()).expect("Could not deserialize Round")
}

pub fn get_global_state(svm: &LiteSVM, global_state_pubkey: Pubkey) -> GlobalState {
    let account = svm.get_account(&global_state_pubkey).expect("GlobalState account does not exist");

    GlobalState::try_deserialize(&mut account.data.as_slice()).expect("Could not deserialize GlobalState")
}

pub fn get_balance(svm: &LiteSVM, pubkey: Pubkey) -> u64 {
    svm.get_balance(&pubkey).unwrap_or(0)
}

pub fn funded_keypair(svm: &mut LiteSVM) -> Keypair {
    let keypair = Keypair::new();

    svm.airdrop(&keypair.pubkey(), AIRDROP_AMOUNT).expect("Could not airdrop");

    keypair
}

pub fn disable_signer(instruction:&mut Instruction, key:Pubkey){
    let account_meta = instruction.accounts.iter_mut().find(
        |account| account.pubkey.eq(&key) && account.is_signer
    );

    match account_meta {
        Some(account_meta) => account_meta.is_signer = false,
        None => panic!("Account not in instruction"),
    }
}

pub fn set_current_time(svm: &mut LiteSVM, time:i64){
        let mut initial_clock = svm.get_sysvar::<Clock>();
        initial_clock.unix_timestamp = time;
        svm.set_sysvar::<Clock>(&initial_clock);
}

/// The first signer pays for the transaction, a fresh blockhash is used each
/// time so resending the same instruction is not rejected as a duplicate.
pub fn send(svm: &mut LiteSVM, instructions: &[Instruction], signers: &[&Keypair]) -> TransactionResult {
    let payer = signers[0].pubkey();

    svm.expire_blockhash();

    let recent_blockhash = svm.latest_blockhash();

    let transaction = Transaction::new_signed_with_payer(
        instructions, Some(&payer), signers, recent_blockhash,
    );

    svm.send_transaction(transaction)
}

pub fn expect_success(result: TransactionResult) {
    match result {
        Ok(result) => {
            println!("Program succeeded (compute units: {:?})", result.compute_units_consumed);
        }
        Err(error) => {
            println!("Program failed: {:?}", error);

            panic!("Expected success but transaction failed");
        }
    }
}

pub fn expect_failure(result: TransactionResult, reason: &str) {
    match result {
        Ok(result) => {
            println!("Program succeeded (compute units: {:?})", result.compute_units_consumed);

            panic!("This transaction should have failed - {}", reason);
        }
        Err(error) => {
            println!("Program failed: {:?}", error);

            println!("Transaction failed successfully");
        }
    }
}

/// Expects the single instruction in the transaction to fail with the given
/// program error.
pub fn expect_error(result: TransactionResult, error: RpsError) {
    match result {
        Ok(result) => {
            println!("Program succeeded (compute units: {:?})", result.compute_units_consumed);

            panic!("This transaction should have failed - {:?}", error);
        }
        Err(failed) => {
            println!("Program failed: {:?}", failed.err);

            assert_eq!(
                failed.err,
                TransactionError::InstructionError(0, InstructionError::Custom(u32::from(error))),
                "Expected {:?}",
                error
            );
        }
    }
}

pub const START_TIME:i64 = 1_700_000_000;

pub struct TestEnvironment {
    pub svm: LiteSVM,
    pub owner: Keypair,
    pub creator: Keypair,
    pub opponent: Keypair,
    /// Pays for the transactions so the players' balances only move by what
    /// the program transfers.
    pub payer: Keypair,
}

/// Loads the program and initializes it with the given fee.
pub fn setup_rps_test(fee: u64) -> TestEnvironment {
    let mut svm = LiteSVM::new();

    add_rps_game_program(&mut svm);

    set_current_time(&mut svm, START_TIME);

    let owner = funded_keypair(&mut svm);
    let creator = funded_keypair(&mut svm);
    let opponent = funded_keypair(&mut svm);
    let payer = funded_keypair(&mut svm);

    let instructions = [crate::common::initialize_instruction(owner.pubkey(), fee)];

    expect_success(send(&mut svm, &instructions, &[&owner]));

    TestEnvironment { svm, owner, creator, opponent, payer }
}

impl TestEnvironment {
    pub fn create_round(&mut self, round_index: u32, deposit_amount: u64) -> TransactionResult {
        let instructions = [crate::common::create_round_instruction(
            self.creator.pubkey(), round_index, deposit_amount
        )];

        send(&mut self.svm, &instructions, &[&self.payer, &self.creator])
    }

    pub fn join_round(&mut self, round_index: u32) -> TransactionResult {
        let instructions = [crate::common::join_round_instruction(
            self.opponent.pubkey(), self.creator.pubkey(), round_index
        )];

        send(&mut self.svm, &instructions, &[&self.payer, &self.opponent])
    }

    pub fn play(&mut self, round_index: u32, is_creator: bool, player_move: u8) -> TransactionResult {
        let player = if is_creator { &self.creator } else { &self.opponent };

        let instructions = [crate::common::play_instruction(
            player.pubkey(), self.creator.pubkey(), round_index, is_creator, player_move
        )];

        send(&mut self.svm, &instructions, &[&self.payer, player])
    }

    pub fn claim(&mut self, round_index: u32, is_creator_claiming: bool) -> TransactionResult {
        let claimer = if is_creator_claiming { &self.creator } else { &self.opponent };

        let instructions = [crate::common::claim_instruction(
            claimer.pubkey(),
            self.creator.pubkey(),
            Some(self.opponent.pubkey()),
            self.owner.pubkey(),
            round_index,
            is_creator_claiming,
        )];

        send(&mut self.svm, &instructions, &[&self.payer, claimer])
    }

    /// Creates and joins a round.
    pub fn open_round(&mut self, round_index: u32, deposit_amount: u64) {
        expect_success(self.create_round(round_index, deposit_amount));
        expect_success(self.join_round(round_index));
    }

    pub fn round(&self, round_index: u32) -> Round {
        get_round(&self.svm, rps_game::round_address(round_index, &self.creator.pubkey()).0)
    }

    pub fn balance(&self, pubkey: Pubkey) -> u64 {
        get_balance(&self.svm, pubkey)
    }

    /// Lamports held by the vault above its rent.
    pub fn escrowed(&self) -> u64 {
        get_balance(&self.svm, rps_game::vault_address().0) - self.svm.minimum_balance_for_rent_exemption(0)
    }

    pub fn advance_time(&mut self, seconds: i64) {
        let now = self.svm.get_sysvar::<Clock>().unix_timestamp;

        set_current_time(&mut self.svm, now + seconds);
    }
}
