// Business domains
pub mod waitlist;
