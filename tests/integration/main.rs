mod anchor_flow;
mod helpers;
mod render;
mod state_transitions;
