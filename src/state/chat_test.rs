use super::*;

fn reply(text: &str) -> Reply {
    Reply {
        text: text.to_owned(),
        citations: Vec::new(),
        generation_time: "1.00".to_owned(),
    }
}

fn cited_reply(text: &str) -> Reply {
    Reply {
        text: text.to_owned(),
        citations: vec![Citation {
            document_type: "act".to_owned(),
            source_path: "finance_act_2023.pdf".to_owned(),
            page_number: Some(12),
        }],
        generation_time: "2.31".to_owned(),
    }
}

// =============================================================
// Conversation creation and selection
// =============================================================

#[test]
fn create_conversation_prepends_and_activates() {
    let mut state = ChatState::default();
    let first = state.create_conversation();
    let second = state.create_conversation();

    assert_eq!(state.conversations.len(), 2);
    assert_eq!(state.conversations[0].id, second);
    assert_eq!(state.conversations[1].id, first);
    assert_eq!(state.active_id.as_deref(), Some(second.as_str()));
    assert_eq!(state.conversations[0].title, DEFAULT_TITLE);
}

#[test]
fn select_conversation_switches_active() {
    let mut state = ChatState::default();
    let first = state.create_conversation();
    state.create_conversation();

    state.select_conversation(&first);
    assert_eq!(state.active_id.as_deref(), Some(first.as_str()));
}

#[test]
fn select_unknown_conversation_is_a_noop() {
    let mut state = ChatState::default();
    let id = state.create_conversation();

    state.select_conversation("no-such-id");
    assert_eq!(state.active_id.as_deref(), Some(id.as_str()));
}

// =============================================================
// Message sequencing
// =============================================================

#[test]
fn message_ids_are_unique_and_ordered() {
    let mut state = ChatState::default();
    let id = state.create_conversation();

    let a = state.append_message(&id, &MessageDraft::user("one")).unwrap();
    let b = state.append_message(&id, &MessageDraft::user("two")).unwrap();
    let c = state
        .append_message(&id, &MessageDraft::assistant(reply("three"), b))
        .unwrap();

    assert!(a < b && b < c);

    let conv = state.active_conversation().unwrap();
    let ids: Vec<u64> = conv.messages.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![a, b, c]);
}

#[test]
fn append_to_unknown_conversation_returns_none() {
    let mut state = ChatState::default();
    state.create_conversation();

    assert!(state.append_message("missing", &MessageDraft::user("hi")).is_none());
}

// =============================================================
// Title derivation
// =============================================================

#[test]
fn title_set_from_first_message() {
    let mut state = ChatState::default();
    let id = state.create_conversation();
    state.append_message(&id, &MessageDraft::user("What is VAT?"));

    assert_eq!(state.conversations[0].title, "What is VAT?");
}

#[test]
fn title_stable_under_further_appends() {
    let mut state = ChatState::default();
    let id = state.create_conversation();
    let (_, user_id) = state.begin_send("What is VAT?").unwrap();
    state.commit_reply(&id, reply("VAT is..."), user_id);
    state.append_message(&id, &MessageDraft::user("And capital gains?"));

    assert_eq!(state.conversations[0].title, "What is VAT?");
}

#[test]
fn long_title_is_truncated_with_ellipsis() {
    let mut state = ChatState::default();
    let id = state.create_conversation();
    let text = "a".repeat(50);
    state.append_message(&id, &MessageDraft::user(text));

    let title = &state.conversations[0].title;
    assert_eq!(title.chars().count(), 43);
    assert!(title.ends_with("..."));
}

#[test]
fn title_at_limit_is_not_truncated() {
    let mut state = ChatState::default();
    let id = state.create_conversation();
    let text = "b".repeat(40);
    state.append_message(&id, &MessageDraft::user(text.clone()));

    assert_eq!(state.conversations[0].title, text);
}

#[test]
fn title_flattens_newlines() {
    let mut state = ChatState::default();
    let id = state.create_conversation();
    state.append_message(&id, &MessageDraft::user("What is\nVAT?"));

    assert_eq!(state.conversations[0].title, "What is VAT?");
}

// =============================================================
// Submit: optimistic append + pending
// =============================================================

#[test]
fn begin_send_rejects_empty_input() {
    let mut state = ChatState::default();

    assert!(state.begin_send("").is_none());
    assert!(state.begin_send("   ").is_none());
    assert!(state.conversations.is_empty());
    assert!(state.pending.is_empty());
}

#[test]
fn begin_send_creates_conversation_when_none_active() {
    let mut state = ChatState::default();
    let (conv_id, msg_id) = state.begin_send("What is VAT?").unwrap();

    assert_eq!(state.active_id.as_deref(), Some(conv_id.as_str()));
    let conv = state.active_conversation().unwrap();
    assert_eq!(conv.title, "What is VAT?");
    assert_eq!(conv.messages.len(), 1);
    assert_eq!(conv.messages[0].id, msg_id);
    assert_eq!(conv.messages[0].role, Role::User);
    assert!(state.is_pending(&conv_id));
}

#[test]
fn begin_send_appends_to_active_conversation() {
    let mut state = ChatState::default();
    let id = state.create_conversation();
    let (conv_id, _) = state.begin_send("hello").unwrap();

    assert_eq!(conv_id, id);
    assert_eq!(state.conversations.len(), 1);
}

#[test]
fn successful_submission_yields_user_then_assistant_and_idle() {
    let mut state = ChatState::default();
    let (conv_id, user_id) = state.begin_send("What is VAT?").unwrap();
    state.commit_reply(&conv_id, cited_reply("VAT is..."), user_id);

    let conv = state.active_conversation().unwrap();
    assert_eq!(conv.messages.len(), 2);
    assert_eq!(conv.messages[0].role, Role::User);
    assert_eq!(conv.messages[1].role, Role::Assistant);
    assert_eq!(conv.messages[1].reply_to, Some(user_id));
    assert_eq!(conv.messages[1].citations.len(), 1);
    assert!(!state.is_pending(&conv_id));
}

#[test]
fn failed_submission_appends_fallback_and_returns_to_idle() {
    let mut state = ChatState::default();
    let (conv_id, user_id) = state.begin_send("What is VAT?").unwrap();
    state.commit_reply(&conv_id, Reply::fallback(), user_id);

    let conv = state.active_conversation().unwrap();
    assert_eq!(conv.messages[1].text, FALLBACK_REPLY);
    assert_eq!(conv.messages[1].generation_time.as_deref(), Some("0.0"));
    assert!(conv.messages[1].citations.is_empty());
    assert!(!state.is_pending(&conv_id));
}

#[test]
fn title_survives_failed_submission() {
    // The optimistic title is documented behavior, not rolled back.
    let mut state = ChatState::default();
    let (conv_id, user_id) = state.begin_send("What is VAT?").unwrap();
    state.commit_reply(&conv_id, Reply::fallback(), user_id);

    assert_eq!(state.conversations[0].title, "What is VAT?");
}

// =============================================================
// Correlation
// =============================================================

#[test]
fn reply_lands_in_issuing_conversation_not_active_one() {
    let mut state = ChatState::default();
    let (conv_a, user_id) = state.begin_send("question for A").unwrap();

    // User switches to a fresh conversation before the reply arrives.
    let conv_b = state.create_conversation();
    assert_eq!(state.active_id.as_deref(), Some(conv_b.as_str()));

    state.commit_reply(&conv_a, reply("answer for A"), user_id);

    let a = state.conversations.iter().find(|c| c.id == conv_a).unwrap();
    let b = state.conversations.iter().find(|c| c.id == conv_b).unwrap();
    assert_eq!(a.messages.len(), 2);
    assert!(b.messages.is_empty());
    assert!(!state.is_pending(&conv_a));
}

#[test]
fn double_send_commits_both_replies_in_completion_order() {
    // No lock prevents a second submit while the first is pending, and no
    // sequence token drops a late reply: both must land, whatever the order.
    let mut state = ChatState::default();
    let (conv_id, first_user) = state.begin_send("first question").unwrap();
    let (conv_id_2, second_user) = state.begin_send("second question").unwrap();
    assert_eq!(conv_id, conv_id_2);

    // Later-issued request resolves first.
    state.commit_reply(&conv_id, reply("second answer"), second_user);
    state.commit_reply(&conv_id, reply("first answer"), first_user);

    let conv = state.active_conversation().unwrap();
    assert_eq!(conv.messages.len(), 4);
    assert_eq!(conv.reply_for(first_user).unwrap().text, "first answer");
    assert_eq!(conv.reply_for(second_user).unwrap().text, "second answer");
    assert!(!state.is_pending(&conv_id));
}

// =============================================================
// Replacement (regeneration)
// =============================================================

#[test]
fn replace_message_swaps_body_in_place() {
    let mut state = ChatState::default();
    let (conv_id, user_id) = state.begin_send("What is VAT?").unwrap();
    state.commit_reply(&conv_id, cited_reply("old answer"), user_id);
    let target = state.active_conversation().unwrap().messages[1].id;

    state.replace_message(&conv_id, target, &reply("new answer"));

    let conv = state.active_conversation().unwrap();
    assert_eq!(conv.messages.len(), 2);
    assert_eq!(conv.messages[1].id, target);
    assert_eq!(conv.messages[1].text, "new answer");
    assert_eq!(conv.messages[1].reply_to, Some(user_id));
    assert!(conv.messages[1].citations.is_empty());
}

#[test]
fn commit_regeneration_clears_pending() {
    let mut state = ChatState::default();
    let (conv_id, user_id) = state.begin_send("What is VAT?").unwrap();
    state.commit_reply(&conv_id, reply("old"), user_id);
    let target = state.active_conversation().unwrap().messages[1].id;

    state.pending.insert(conv_id.clone());
    state.commit_regeneration(&conv_id, target, &Reply::fallback());

    let conv = state.active_conversation().unwrap();
    assert_eq!(conv.messages[1].text, FALLBACK_REPLY);
    assert!(!state.is_pending(&conv_id));
}

#[test]
fn reply_for_finds_paired_assistant_message() {
    let mut state = ChatState::default();
    let (conv_id, user_id) = state.begin_send("What is VAT?").unwrap();
    state.commit_reply(&conv_id, reply("VAT is..."), user_id);

    let conv = state.active_conversation().unwrap();
    let paired = conv.reply_for(user_id).unwrap();
    assert_eq!(paired.text, "VAT is...");
    assert!(conv.reply_for(paired.id).is_none());
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_drops_all_state() {
    let mut state = ChatState::default();
    let (conv_id, _) = state.begin_send("What is VAT?").unwrap();
    assert!(state.is_pending(&conv_id));

    state.reset();
    assert!(state.conversations.is_empty());
    assert!(state.active_id.is_none());
    assert!(state.pending.is_empty());
    assert!(state.active_conversation().is_none());
}
