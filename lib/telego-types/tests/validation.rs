// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use telego_types::RemoteCall;
use telego_types::functions::*;
use telego_types::types::{ChatAction, InlineQueryResult};

fn missing<R: RemoteCall>(request: R) -> &'static str {
    request
        .validate()
        .expect_err("request should have been rejected")
        .name
}

#[test]
fn chat_id_is_required_everywhere() {
    assert_eq!(missing(SendMessage::new("", "hi")), "chat_id");
    assert_eq!(missing(ForwardMessage::new(0, 1, 2)), "chat_id");
    assert_eq!(missing(SendPhoto::new(0, "photo-id")), "chat_id");
    assert_eq!(missing(SendAudio::new(0, "audio-id")), "chat_id");
    assert_eq!(missing(SendDocument::new(0, "document-id")), "chat_id");
    assert_eq!(missing(SendSticker::new(0, "sticker-id")), "chat_id");
    assert_eq!(missing(SendVideo::new(0, "video-id")), "chat_id");
    assert_eq!(missing(SendVoice::new(0, "voice-id")), "chat_id");
    assert_eq!(missing(SendLocation::new(0, 1.5, 2.5)), "chat_id");
    assert_eq!(missing(SendVenue::new(0, 1.5, 2.5, "t", "a")), "chat_id");
    assert_eq!(missing(SendContact::new(0, "+1", "Ann")), "chat_id");
    assert_eq!(missing(SendChatAction::new(0, ChatAction::Typing)), "chat_id");
    assert_eq!(missing(SendGame::new(0, "game")), "chat_id");
    assert_eq!(missing(KickChatMember::new(0, 5)), "chat_id");
    assert_eq!(missing(LeaveChat::new("")), "chat_id");
    assert_eq!(missing(UnbanChatMember::new(0, 5)), "chat_id");
    assert_eq!(missing(GetChat::new(0)), "chat_id");
    assert_eq!(missing(GetChatAdministrators::new(0)), "chat_id");
    assert_eq!(missing(GetChatMembersCount::new(0)), "chat_id");
    assert_eq!(missing(GetChatMember::new(0, 5)), "chat_id");
}

#[test]
fn other_required_fields() {
    assert_eq!(missing(SendMessage::new(1, "")), "text");
    assert_eq!(missing(ForwardMessage::new(1, 0, 2)), "from_chat_id");
    assert_eq!(missing(ForwardMessage::new(1, "@from", 0)), "message_id");
    assert_eq!(missing(SendPhoto::new(1, "")), "photo");
    assert_eq!(missing(SendAudio::new(1, "")), "audio");
    assert_eq!(missing(SendDocument::new(1, "")), "document");
    assert_eq!(missing(SendSticker::new(1, "")), "sticker");
    assert_eq!(missing(SendVideo::new(1, "")), "video");
    assert_eq!(missing(SendVoice::new(1, "")), "voice");
    assert_eq!(missing(SendVenue::new(1, 1.5, 2.5, "", "a")), "title");
    assert_eq!(missing(SendVenue::new(1, 1.5, 2.5, "t", "")), "address");
    assert_eq!(missing(SendContact::new(1, "", "Ann")), "phone_number");
    assert_eq!(missing(SendContact::new(1, "+1", "")), "first_name");
    assert_eq!(missing(SendGame::new(1, "")), "game_short_name");
    assert_eq!(missing(KickChatMember::new(1, 0)), "user_id");
    assert_eq!(missing(UnbanChatMember::new(1, 0)), "user_id");
    assert_eq!(missing(GetChatMember::new(1, 0)), "user_id");
    assert_eq!(missing(GetUserProfilePhotos::new(0)), "user_id");
    assert_eq!(missing(GetFile::new("")), "file_id");
    assert_eq!(missing(AnswerCallbackQuery::new("")), "callback_query_id");
    assert_eq!(
        missing(AnswerInlineQuery::new("", Vec::<InlineQueryResult>::new())),
        "inline_query_id"
    );
}

#[test]
fn game_score_targets() {
    assert_eq!(
        missing(SetGameScore::new(0, 10, MessageTarget::inline("AAEC"))),
        "user_id"
    );
    assert_eq!(
        missing(SetGameScore::new(5, 10, MessageTarget::chat(0, 3))),
        "chat_id"
    );
    assert_eq!(
        missing(GetGameHighScores::new(5, MessageTarget::chat(1, 0))),
        "message_id"
    );
    assert_eq!(
        missing(GetGameHighScores::new(5, MessageTarget::inline(""))),
        "inline_message_id"
    );
}

#[test]
fn requests_without_required_fields_are_valid() {
    assert!(GetMe {}.validate().is_ok());
    assert!(GetUpdates::new().validate().is_ok());
    assert!(SetWebhook::new("").validate().is_ok());
    assert!(DeleteWebhook {}.validate().is_ok());
    assert!(GetWebhookInfo {}.validate().is_ok());
    assert!(SendLocation::new("@channel", 0.0, 0.0).validate().is_ok());
}
