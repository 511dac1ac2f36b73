use api_types::quote::{Quote, QuoteId};
use quotes_client::{
    client::{Client, ClientError},
    dispatch::UiEvent,
    page::Page,
    render::Role,
    runtime::{Command, Runtime},
    state::SortMode,
};
use reqwest::StatusCode;
use server::Store;

fn quote(id: u64, text: &str, author: &str, likes: u64) -> Quote {
    Quote {
        id: QuoteId::Number(id),
        quote: text.to_string(),
        author: author.to_string(),
        likes,
    }
}

fn seed() -> Vec<Quote> {
    vec![
        quote(1, "Be yourself; everyone else is already taken.", "Oscar Wilde", 2),
        quote(2, "There is no charm equal to tenderness of heart.", "Jane Austen", 0),
        quote(3, "The secret of getting ahead is getting started.", "Mark Twain", 5),
    ]
}

async fn serve(quotes: Vec<Quote>) -> Client {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = server::spawn_with_listener(Store::with_quotes(quotes), listener).unwrap();
    Client::new(&format!("http://{addr}")).unwrap()
}

async fn loaded_page(client: Client) -> (Page, Runtime<Client>) {
    let mut page = Page::new().unwrap();
    let mut runtime = Runtime::new(client);
    runtime.spawn_all(page.load());
    runtime.settle(&mut page).await;
    (page, runtime)
}

fn shown(page: &Page) -> Vec<String> {
    page.card_views()
        .into_iter()
        .map(|card| card.id.to_string())
        .collect()
}

fn element(page: &Page, id: u64, role: Role) -> quotes_client::dom::NodeId {
    page.card_element(&QuoteId::Number(id), role).unwrap()
}

#[tokio::test]
async fn load_renders_every_quote_in_server_order() {
    let (page, _runtime) = loaded_page(serve(seed()).await).await;

    assert_eq!(shown(&page), vec!["1", "2", "3"]);
    let card = page.card_view(&QuoteId::Number(3)).unwrap();
    assert_eq!(card.author, "Mark Twain");
    assert_eq!(card.likes, "5");
    assert!(!card.editing);
}

#[tokio::test]
async fn like_is_persisted() {
    let client = serve(seed()).await;
    let (mut page, mut runtime) = loaded_page(client.clone()).await;

    let commands = page.dispatch(UiEvent::Click(element(&page, 1, Role::LikeButton)));
    assert_eq!(page.card_view(&QuoteId::Number(1)).unwrap().likes, "3");
    runtime.spawn_all(commands);
    runtime.settle(&mut page).await;

    let stored = client.list_quotes().await.unwrap();
    assert_eq!(stored[0].likes, 3);
}

#[tokio::test]
async fn edit_is_persisted() {
    let client = serve(seed()).await;
    let (mut page, mut runtime) = loaded_page(client.clone()).await;

    page.dispatch(UiEvent::Click(element(&page, 2, Role::EditButton)));
    page.dispatch(UiEvent::Input {
        node: element(&page, 2, Role::EditAuthorInput),
        value: "J. Austen".to_string(),
    });
    let commands = page.dispatch(UiEvent::Submit(element(&page, 2, Role::EditForm)));
    runtime.spawn_all(commands);
    runtime.settle(&mut page).await;

    let stored = client.list_quotes().await.unwrap();
    assert_eq!(stored[1].author, "J. Austen");
    assert_eq!(stored[1].quote, seed()[1].quote);
    assert_eq!(page.card_view(&QuoteId::Number(2)).unwrap().author, "J. Austen");
}

#[tokio::test]
async fn delete_is_persisted_and_second_delete_is_not_found() {
    let client = serve(seed()).await;
    let (mut page, mut runtime) = loaded_page(client.clone()).await;

    let commands = page.dispatch(UiEvent::Click(element(&page, 3, Role::DeleteButton)));
    assert_eq!(shown(&page), vec!["1", "2"]);
    runtime.spawn_all(commands);
    runtime.settle(&mut page).await;

    assert_eq!(client.list_quotes().await.unwrap().len(), 2);
    let err = client.delete_quote(&QuoteId::Number(3)).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(QuoteId::Number(3))));
}

#[tokio::test]
async fn created_quote_appears_after_the_server_answers() {
    let client = serve(seed()).await;
    let (mut page, mut runtime) = loaded_page(client.clone()).await;

    page.dispatch(UiEvent::Input {
        node: page.new_quote_input(),
        value: "Simplicity is the soul of efficiency.".to_string(),
    });
    page.dispatch(UiEvent::Input {
        node: page.author_input(),
        value: "Austin Freeman".to_string(),
    });
    let commands = page.dispatch(UiEvent::Submit(page.new_quote_form()));
    assert_eq!(shown(&page), vec!["1", "2", "3"]);

    runtime.spawn_all(commands);
    runtime.settle(&mut page).await;

    assert_eq!(shown(&page), vec!["1", "2", "3", "4"]);
    let card = page.card_view(&QuoteId::Number(4)).unwrap();
    assert_eq!(card.likes, "0");
    assert_eq!(card.author, "Austin Freeman");
}

#[tokio::test]
async fn sort_toggle_round_trip() {
    let (mut page, mut runtime) = loaded_page(serve(seed()).await).await;

    let commands = page.dispatch(UiEvent::Click(page.sort_button()));
    assert_eq!(commands, vec![Command::ListQuotes { mode: SortMode::AuthorSorted }]);
    runtime.spawn_all(commands);
    runtime.settle(&mut page).await;
    assert_eq!(shown(&page), vec!["2", "3", "1"]);

    runtime.spawn_all(page.dispatch(UiEvent::Click(page.sort_button())));
    runtime.settle(&mut page).await;
    assert_eq!(shown(&page), vec!["1", "2", "3"]);
}

#[tokio::test]
async fn rapid_double_toggle_ends_in_insertion_order() {
    let (mut page, mut runtime) = loaded_page(serve(seed()).await).await;

    runtime.spawn_all(page.dispatch(UiEvent::Click(page.sort_button())));
    runtime.spawn_all(page.dispatch(UiEvent::Click(page.sort_button())));
    runtime.settle(&mut page).await;

    assert_eq!(page.sort_mode(), SortMode::InsertionOrder);
    assert_eq!(shown(&page), vec!["1", "2", "3"]);
}

#[tokio::test]
async fn unreachable_server_leaves_the_page_usable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = Client::new(&format!("http://{addr}")).unwrap();

    let err = client.list_quotes().await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));

    let (mut page, mut runtime) = loaded_page(client).await;
    assert!(page.list().is_empty());

    runtime.spawn_all(page.dispatch(UiEvent::Submit(page.new_quote_form())));
    runtime.settle(&mut page).await;
    assert!(page.list().is_empty());
}

#[tokio::test]
async fn store_errors_carry_status_and_message() {
    let client = serve(vec![quote(u64::MAX, "The last one.", "Mark Twain", 0)]).await;

    let err = client.create_quote("One more.", "Jane Austen").await.unwrap_err();

    match err {
        ClientError::Server { status, message } => {
            assert_eq!(status, StatusCode::INSUFFICIENT_STORAGE);
            assert_eq!(message, "no numeric quote ids left");
        }
        other => panic!("expected a server error, got {other:?}"),
    }
}

#[tokio::test]
async fn failed_create_through_the_page_appends_nothing() {
    let client = serve(vec![quote(u64::MAX, "The last one.", "Mark Twain", 0)]).await;
    let (mut page, mut runtime) = loaded_page(client).await;

    runtime.spawn_all(page.dispatch(UiEvent::Submit(page.new_quote_form())));
    runtime.settle(&mut page).await;

    assert_eq!(shown(&page), vec![u64::MAX.to_string()]);
}
