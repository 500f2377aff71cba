pub mod conference;
