/*!
Generic structures, not tied to any particular part of the library.
*/

pub mod random;
