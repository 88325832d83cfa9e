use std::io::{self, BufRead};

use rust_decimal::Decimal;
use tracing::{error, info};
use uuid::Uuid;

use lottery_sim::constants::{CONFIG_PATH, USER_PLAYER_ID};
use lottery_sim::engine::player_setup::setup_cpu_players;
use lottery_sim::engine::ticket_purchase::purchase_tickets;
use lottery_sim::{
    display, AwardResult, DrawEngine, GameRng, LotteryConfig, Player, Result, Roster, TicketPool,
};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Errors end the round, not the process: report and exit 0.
    if let Err(err) = run() {
        error!(%err, "lottery round failed");
        println!("Lottery Error: {err}");
    }
}

fn run() -> Result<()> {
    let config = LotteryConfig::load(CONFIG_PATH)?;
    let round_id = Uuid::new_v4().to_string();
    info!(%round_id, "starting lottery round");

    let mut rng = GameRng::from_entropy();
    let mut roster = Roster::new();
    let mut user = Player::new(USER_PLAYER_ID, round_id.as_str(), config.starting_balance);

    println!("{}", display::welcome_banner(&user, &config));

    setup_cpu_players(&mut roster, &round_id, &config, &mut rng)?;

    let requested = read_ticket_request()?;
    let purchased = purchase_tickets(&mut user, requested, &config)?;
    if i64::from(purchased) < requested {
        println!("{}", display::purchase_notice(purchased));
    }
    roster.add_player(user);

    let players = roster.players_for_round(&round_id);
    println!("{}", display::draw_summary(&players)?);

    let pool = TicketPool::from_players(players.iter().copied());
    let total_revenue = roster.total_revenue(&round_id, config.ticket_price);

    let mut engine = DrawEngine::new(config, pool, rng);
    let results = engine.run(&mut roster, &round_id)?;
    println!("{}", display::winners_report(&results));

    let total_distributed: Decimal = results.iter().map(AwardResult::total_distributed).sum();
    let house_revenue = total_revenue - total_distributed;
    info!(
        %house_revenue,
        rounding_remainder = %engine.rounding_remainder(),
        "round complete"
    );
    println!("{}", display::house_revenue_line(house_revenue));

    Ok(())
}

/// One line of numeric input: how many tickets the human player wants.
fn read_ticket_request() -> Result<i64> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().parse::<i64>()?)
}
