mod test_request;
