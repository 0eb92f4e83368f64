use crate::error::OracleError;
use crate::events::{ReporterSlashed, RoundFinalized};
use crate::state::{Feed, ProtocolConfig, Reporter, Round};
use crate::utils::custody::{slash_stake, Vault};
use crate::utils::settlement::Settlement;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Aggregates the closed round, slashes outliers and shares the fee pool
/// among the remaining reporters.
///
/// `remaining_accounts` must hold the writable `Reporter` account of every
/// submission, in submission order.
pub fn finalize_round<'info>(
    ctx: Context<'_, '_, 'info, 'info, FinalizeRound<'info>>,
    _feed_id: u64,
) -> Result<u64> {
    let clock = Clock::get()?;
    let settlement = Settlement::plan(&ctx.accounts.feed, &ctx.accounts.round)?;

    require!(
        ctx.remaining_accounts.len() == settlement.verdicts.len(),
        OracleError::ReporterAccountMismatch
    );

    let feed_id = ctx.accounts.feed.id;
    let round_number = ctx.accounts.round.round;
    let slash_percentage_bps = ctx.accounts.protocol_config.slash_percentage_bps;

    let mut slashed_total: u64 = 0;
    for (index, account_info) in ctx.remaining_accounts.iter().enumerate() {
        require!(
            account_info.is_writable,
            OracleError::ReporterAccountMismatch
        );
        let mut reporter: Account<'info, Reporter> = Account::try_from(account_info)?;
        let penalty = settlement.apply(index, &mut reporter, slash_percentage_bps)?;
        reporter.exit(ctx.program_id)?;

        let verdict = &settlement.verdicts[index];
        if verdict.slashed && penalty == 0 {
            // Reporter unregistered before finalization; nothing left to take.
            msg!(
                "Reporter {} deviated by {} bps but holds no stake",
                verdict.reporter,
                verdict.deviation_bps
            );
        } else if verdict.slashed {
            slashed_total = slashed_total
                .checked_add(penalty)
                .ok_or(OracleError::ArithmeticOverflow)?;

            emit!(ReporterSlashed {
                feed_id,
                round: round_number,
                reporter: verdict.reporter,
                value: verdict.value,
                deviation_bps: verdict.deviation_bps,
                penalty,
                remaining_stake: reporter.stake,
                deactivated: !reporter.is_active,
            });
        }
    }

    let answer = settlement.commit(
        &mut ctx.accounts.feed,
        &mut ctx.accounts.round,
        clock.slot,
        clock.unix_timestamp,
    )?;

    // All bookkeeping is written; only now move the forfeited stake.
    let stake_vault = Vault {
        account: &ctx.accounts.stake_vault,
        mint: &ctx.accounts.mint,
        config: &ctx.accounts.protocol_config,
        token_program: &ctx.accounts.token_program,
    };
    slash_stake(&stake_vault, &ctx.accounts.treasury, slashed_total)?;

    let honest = settlement.honest_count();
    let slashed = settlement.verdicts.len() - honest;
    msg!(
        "Finalized round {} for feed {}: median {}, {} honest, {} slashed",
        round_number,
        feed_id,
        answer.value,
        honest,
        slashed
    );

    emit!(RoundFinalized {
        feed_id,
        round: round_number,
        median: answer.value,
        honest_reporters: honest as u8,
        slashed_reporters: slashed as u8,
        fee_share: settlement.fee_split.share,
        finalized_slot: answer.slot,
    });

    Ok(answer.value)
}

#[derive(Accounts)]
#[instruction(feed_id: u64)]
pub struct FinalizeRound<'info> {
    #[account(
        seeds = [ProtocolConfig::SEED_PREFIX],
        bump = protocol_config.bump,
    )]
    pub protocol_config: Account<'info, ProtocolConfig>,

    #[account(
        mut,
        seeds = [Feed::SEED_PREFIX, &feed_id.to_le_bytes()],
        bump = feed.bump,
    )]
    pub feed: Account<'info, Feed>,

    #[account(
        mut,
        seeds = [
            Round::SEED_PREFIX,
            feed.key().as_ref(),
            &feed.current_round.to_le_bytes(),
        ],
        bump = round.bump,
    )]
    pub round: Account<'info, Round>,

    #[account(address = protocol_config.mint)]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        seeds = [ProtocolConfig::STAKE_VAULT_SEED],
        bump = protocol_config.stake_vault_bump,
    )]
    pub stake_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        address = protocol_config.treasury,
    )]
    pub treasury: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}
