pub mod best_candidate_selector;
