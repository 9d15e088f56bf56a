pub mod u510_update_nickname;
