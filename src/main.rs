use incheck::board::Board;
use incheck::check::is_in_check;
use incheck::player::Player::*;

fn main() {
    env_logger::init();
    let board = Board::classical();
    for player in [White, Black] {
        match is_in_check(&board, player) {
            Ok(check) => println!("{:?} in check: {}", player, check),
            Err(e) => eprintln!("{}", e),
        }
    }
}
