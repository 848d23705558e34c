/*!
The search, factored into a collection of procedures.

- [score] --- the one-pass assessment of an assignment against every clause,
  producing the satisfied count and a suggested flip.
- [solve] --- the flip loop with adaptive noise, terminating on success or the
  failsafe.
*/

pub mod score;
pub mod solve;
