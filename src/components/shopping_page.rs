//! Shopping Page Component
//!
//! Album grid, the item grid of the open album, and the add form shared by
//! both. Item photos are shrunk before they are stored.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::dialogs::{confirm_then, BrowserDialogs, Dialogs, ALERT_IMAGE_FAILED, CONFIRM_DELETE_ALBUM, CONFIRM_DELETE_PRODUCT};
use crate::files::downscale_image;
use crate::models::{ShoppingAlbum, ShoppingItem};
use crate::shopping::{add_album, add_item, find_album, remove_album, remove_item, toggle_item};
use crate::store::{store_set_albums, use_app_store, AppStateStoreFields, AppStore};

/// Replace the album list when an operation changed it
fn commit(store: &AppStore, next: Option<Vec<ShoppingAlbum>>) {
    if let Some(next) = next {
        store_set_albums(store, next);
    }
}

#[component]
fn AlbumGrid(
    #[prop(into)] albums: Signal<Vec<ShoppingAlbum>>,
    #[prop(into)] on_open: Callback<String>,
    #[prop(into)] on_add: Callback<()>,
) -> impl IntoView {
    let store = use_app_store();
    view! {
        <div class="album-grid">
            <For
                each=move || albums.get()
                key=|album| (album.id.clone(), album.name.clone(), album.items.len())
                children=move |album| {
                    let open_id = album.id.clone();
                    let delete_id = album.id.clone();
                    view! {
                        <div class="album-card" on:click=move |_| on_open.run(open_id.clone())>
                            <div class="album-icon">"📁"</div>
                            <h3>{album.name.clone()}</h3>
                            <p class="album-count">{format!("{} 個商品", album.items.len())}</p>
                            <button
                                class="album-delete"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    confirm_then(&BrowserDialogs, CONFIRM_DELETE_ALBUM, || {
                                        let next = store.shopping_albums().with_untracked(|a| remove_album(a, &delete_id));
                                        commit(&store, next);
                                    });
                                }
                            >
                                "🗑"
                            </button>
                        </div>
                    }
                }
            />
            <button class="add-card" on:click=move |_| on_add.run(())>
                <span class="add-card-icon">"+"</span>
                <span>"新增相簿"</span>
            </button>
        </div>
    }
}

#[component]
fn ProductCard(album_id: String, item: ShoppingItem) -> impl IntoView {
    let store = use_app_store();
    let album_id = StoredValue::new(album_id);
    let item_id = StoredValue::new(item.id.clone());

    let on_toggle = move |_: web_sys::MouseEvent| {
        let next = store
            .shopping_albums()
            .with_untracked(|a| album_id.with_value(|album| item_id.with_value(|id| toggle_item(a, album, id))));
        commit(&store, next);
    };
    let on_delete = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        confirm_then(&BrowserDialogs, CONFIRM_DELETE_PRODUCT, || {
            let next = store
                .shopping_albums()
                .with_untracked(|a| album_id.with_value(|album| item_id.with_value(|id| remove_item(a, album, id))));
            commit(&store, next);
        });
    };

    let card_class = if item.checked { "product-card checked" } else { "product-card" };
    let photo = match item.image_url.clone() {
        Some(src) => view! { <img src=src alt=item.name.clone() /> }.into_any(),
        None => view! { <div class="product-placeholder">"🖼"</div> }.into_any(),
    };

    view! {
        <div class=card_class on:click=on_toggle>
            <div class="product-photo">
                {photo}
                {item.checked.then(|| view! { <div class="product-check-overlay">"✔"</div> })}
            </div>
            <div class="product-body">
                <span class="product-name">{item.name.clone()}</span>
                <span class="product-check">{if item.checked { "●" } else { "○" }}</span>
            </div>
            <button class="product-delete" on:click=on_delete>"🗑"</button>
        </div>
    }
}

#[component]
fn ProductGrid(#[prop(into)] album: Signal<Option<ShoppingAlbum>>, #[prop(into)] on_add: Callback<()>) -> impl IntoView {
    let album_id = move || album.with_untracked(|a| a.as_ref().map(|a| a.id.clone()).unwrap_or_default());
    view! {
        <div class="product-grid">
            <For
                each=move || album.with(|a| a.as_ref().map(|a| a.items.clone()).unwrap_or_default())
                key=|item| (item.id.clone(), item.checked)
                children=move |item| view! { <ProductCard album_id=album_id() item=item /> }
            />
            <button class="add-card" on:click=move |_| on_add.run(())>
                <span class="add-card-icon">"+"</span>
                <span>"新增商品"</span>
            </button>
        </div>
    }
}

#[component]
fn AddForm(
    #[prop(into)] in_album: Signal<bool>,
    name: RwSignal<String>,
    image: RwSignal<Option<String>>,
    #[prop(into)] on_create: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (max_width, quality) = ctx.with_config(|c| (c.shopping.max_image_width, c.shopping.jpeg_quality));
    let processing = RwSignal::new(false);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_image = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        input.set_value("");
        processing.set(true);
        spawn_local(async move {
            match downscale_image(&file, max_width, quality).await {
                Ok(data_url) => image.set(Some(data_url)),
                Err(e) => {
                    log::error!("[IMAGE] Failed to process photo: {}", e);
                    BrowserDialogs.alert(ALERT_IMAGE_FAILED);
                }
            }
            processing.set(false);
        });
    };

    let photo_field = move || {
        in_album.get().then(|| {
            let picker = move || match image.get() {
                Some(src) => view! {
                    <div class="photo-preview">
                        <img src=src alt="Preview" />
                        <button type="button" class="photo-clear" on:click=move |_| image.set(None)>"×"</button>
                    </div>
                }
                .into_any(),
                None => view! {
                    <button
                        type="button"
                        class="photo-pick"
                        disabled=move || processing.get()
                        on:click=move |_| {
                            if let Some(input) = file_input.get() {
                                input.click();
                            }
                        }
                    >
                        {move || if processing.get() { "處理中..." } else { "📷 點擊上傳 / 拍攝照片" }}
                    </button>
                }
                .into_any(),
            };
            view! {
                <div class="field">
                    <label>"商品照片 (選填)"</label>
                    {picker}
                </div>
            }
        })
    };

    view! {
        <div class="add-form">
            <h3>{move || if in_album.get() { "新增商品" } else { "新增相簿" }}</h3>
            <div class="field">
                <label>{move || if in_album.get() { "商品名稱" } else { "相簿名稱" }}</label>
                <input
                    autofocus
                    placeholder=move || if in_album.get() { "例如：眉筆" } else { "例如：藥妝店" }
                    prop:value=name
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </div>
            <input type="file" accept="image/*" class="hidden" node_ref=file_input on:change=on_image />
            {photo_field}
            <div class="form-actions">
                <button class="secondary-btn" on:click=move |_| on_cancel.run(())>"取消"</button>
                <button class="primary-btn" disabled=move || processing.get() on:click=move |_| on_create.run(())>
                    {move || if processing.get() { "處理中..." } else { "確認新增" }}
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn ShoppingPage() -> impl IntoView {
    let store = use_app_store();
    let albums = Memo::new(move |_| store.shopping_albums().get());
    let active_album = RwSignal::new(None::<String>);
    let adding = RwSignal::new(false);
    let new_name = RwSignal::new(String::new());
    let new_image = RwSignal::new(None::<String>);

    let open_album = Memo::new(move |_| {
        active_album.with(|id| id.as_ref().and_then(|id| albums.with(|a| find_album(a, id).cloned())))
    });

    let reset = move || {
        new_name.set(String::new());
        new_image.set(None);
        adding.set(false);
    };

    let on_create = Callback::new(move |()| {
        let name = new_name.get_untracked();
        let next = albums.with_untracked(|a| match open_album.get_untracked() {
            Some(album) => add_item(a, &album.id, &name, new_image.get_untracked()),
            None => add_album(a, &name),
        });
        if next.is_some() {
            commit(&store, next);
            reset();
        }
    });

    let heading = move || open_album.with(|a| a.as_ref().map(|a| a.name.clone())).unwrap_or_else(|| "購物清單".to_string());

    let content = move || {
        if adding.get() {
            return view! {
                <AddForm
                    in_album=Signal::derive(move || open_album.with(|a| a.is_some()))
                    name=new_name
                    image=new_image
                    on_create=on_create
                    on_cancel=Callback::new(move |()| adding.set(false))
                />
            }
            .into_any();
        }
        if open_album.with(|a| a.is_some()) {
            view! { <ProductGrid album=open_album on_add=Callback::new(move |()| adding.set(true)) /> }.into_any()
        } else {
            view! {
                <AlbumGrid
                    albums=albums
                    on_open=Callback::new(move |id: String| active_album.set(Some(id)))
                    on_add=Callback::new(move |()| adding.set(true))
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="shopping-page">
            <div class="page-heading">
                <Show
                    when=move || open_album.with(|a| a.is_some())
                    fallback=|| view! { <span class="page-icon">"🛍"</span> }
                >
                    <button
                        class="icon-btn"
                        on:click=move |_| {
                            active_album.set(None);
                            adding.set(false);
                        }
                    >
                        "←"
                    </button>
                </Show>
                <h2>{heading}</h2>
            </div>
            {content}
        </div>
    }
}
