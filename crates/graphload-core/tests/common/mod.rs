pub mod fake_wiki;
