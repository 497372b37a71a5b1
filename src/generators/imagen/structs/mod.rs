pub mod imagen_predict_response;
