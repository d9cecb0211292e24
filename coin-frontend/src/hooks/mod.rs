pub mod use_coin_page;
